use bytemuck::{
    Pod,
    Zeroable,
};
use static_assertions::const_assert_eq;

use crate::{
    error::Result,
    gaussian::splat::{
        MOTION_COEFF_COUNT,
        OMEGA_COEFF_COUNT,
        Position,
        Splat,
    },
    splatv::f16::{
        pack_half_pairs_into,
        unpack_half_pairs,
    },
};


pub const RECORD_SIZE: usize = 64;


/// One splat as laid out in the splatv record stream.
///
/// `rotation_scale` holds `[rot_0..3, scale_0..2, 0]` and
/// `motion_omega_trbf` holds `[motion_0..8, 0, omega_0..3, trbf_center, trbf_scale]`,
/// both as half pairs.
#[derive(
    Clone,
    Debug,
    Default,
    Copy,
    PartialEq,
    Eq,
    Pod,
    Zeroable,
)]
#[repr(C)]
pub struct SplatvRecord {
    pub position: [u32; 3],
    pub rotation_scale: [u32; 4],
    pub color: [u8; 4],
    pub motion_omega_trbf: [u32; 8],
}

const_assert_eq!(std::mem::size_of::<SplatvRecord>(), RECORD_SIZE);


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodedRecord {
    pub record: SplatvRecord,
    pub saturated: usize,
}

impl SplatvRecord {
    pub fn encode(splat: &Splat) -> Result<EncodedRecord> {
        let scale = splat.scale();
        let rotation_scale_values = [
            splat.rotation[0],
            splat.rotation[1],
            splat.rotation[2],
            splat.rotation[3],
            scale[0],
            scale[1],
            scale[2],
            0.0,
        ];

        let mut motion_values = [0.0; 16];
        motion_values[..MOTION_COEFF_COUNT].copy_from_slice(&splat.motion);
        motion_values[MOTION_COEFF_COUNT] = 0.0;
        motion_values[10..10 + OMEGA_COEFF_COUNT].copy_from_slice(&splat.omega);
        motion_values[14] = splat.trbf_center;
        motion_values[15] = splat.trbf_scale();

        let mut record = SplatvRecord {
            position: splat.position.map(f32::to_bits),
            color: [
                quantize_color(splat.color_dc[0]),
                quantize_color(splat.color_dc[1]),
                quantize_color(splat.color_dc[2]),
                quantize_opacity(splat.opacity()),
            ],
            ..Default::default()
        };

        let saturated = pack_half_pairs_into(&rotation_scale_values, &mut record.rotation_scale)?
            + pack_half_pairs_into(&motion_values, &mut record.motion_omega_trbf)?;

        Ok(EncodedRecord { record, saturated })
    }

    pub fn write_le(&self, out: &mut [u8; RECORD_SIZE]) {
        *out = bytemuck::cast(self.to_le());
    }

    pub fn read_le(bytes: &[u8; RECORD_SIZE]) -> Self {
        bytemuck::pod_read_unaligned::<SplatvRecord>(bytes.as_slice()).to_le()
    }

    // byte swap on big endian targets, identity otherwise (and its own inverse)
    fn to_le(self) -> Self {
        Self {
            position: self.position.map(u32::to_le),
            rotation_scale: self.rotation_scale.map(u32::to_le),
            color: self.color,
            motion_omega_trbf: self.motion_omega_trbf.map(u32::to_le),
        }
    }

    pub fn position(&self) -> Position {
        self.position.map(f32::from_bits)
    }

    pub fn rotation(&self) -> [f32; 4] {
        let values = unpack_half_pairs(&self.rotation_scale);
        [values[0], values[1], values[2], values[3]]
    }

    pub fn scale(&self) -> [f32; 3] {
        let values = unpack_half_pairs(&self.rotation_scale);
        [values[4], values[5], values[6]]
    }

    pub fn motion(&self) -> [f32; MOTION_COEFF_COUNT] {
        let values = unpack_half_pairs(&self.motion_omega_trbf);
        let mut motion = [0.0; MOTION_COEFF_COUNT];
        motion.copy_from_slice(&values[..MOTION_COEFF_COUNT]);
        motion
    }

    pub fn omega(&self) -> [f32; OMEGA_COEFF_COUNT] {
        let values = unpack_half_pairs(&self.motion_omega_trbf);
        [values[10], values[11], values[12], values[13]]
    }

    pub fn trbf_center(&self) -> f32 {
        unpack_half_pairs(&self.motion_omega_trbf)[14]
    }

    pub fn trbf_scale(&self) -> f32 {
        unpack_half_pairs(&self.motion_omega_trbf)[15]
    }
}


/// Clamped and truncated toward zero, so 0.5 maps to 127 and NaN to 0.
pub fn quantize_color(value: f32) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}

/// Rounded half away from zero.
pub fn quantize_opacity(opacity: f32) -> u8 {
    (opacity * 255.0).round().clamp(0.0, 255.0) as u8
}
