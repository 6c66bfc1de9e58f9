use half::f16;

use crate::error::{
    Result,
    SplatvError,
};


/// `low` in bits 0..16, `high` in bits 16..32.
pub fn pack_half2x16(low: f32, high: f32) -> u32 {
    pack_f16s_to_u32(
        f16::from_f32(low),
        f16::from_f32(high),
    )
}

pub fn unpack_half2x16(value: u32) -> (f32, f32) {
    let (low, high) = unpack_u32_to_f16s(value);
    (low.to_f32(), high.to_f32())
}

fn pack_f16s_to_u32(low: f16, high: f16) -> u32 {
    let high_bits = (high.to_bits() as u32) << 16;
    let low_bits = low.to_bits() as u32;
    high_bits | low_bits
}

fn unpack_u32_to_f16s(value: u32) -> (f16, f16) {
    let low = f16::from_bits((value & 0xFFFF) as u16);
    let high = f16::from_bits((value >> 16) as u16);
    (low, high)
}


/// Packs `values` pairwise into `out`, `values[2i]` in the low half of
/// `out[i]` and `values[2i + 1]` in the high half.
///
/// Returns how many finite inputs saturated to infinity.
pub fn pack_half_pairs_into(values: &[f32], out: &mut [u32]) -> Result<usize> {
    if values.len() % 2 != 0 || values.len() / 2 != out.len() {
        return Err(SplatvError::PreconditionViolation {
            values: values.len(),
            words: out.len(),
        });
    }

    let mut saturated = 0;
    for (word, pair) in out.iter_mut().zip(values.chunks_exact(2)) {
        let low = f16::from_f32(pair[0]);
        let high = f16::from_f32(pair[1]);

        saturated += overflowed(pair[0], low) as usize;
        saturated += overflowed(pair[1], high) as usize;

        *word = pack_f16s_to_u32(low, high);
    }

    Ok(saturated)
}

pub fn pack_half_pairs(values: &[f32]) -> Result<Vec<u32>> {
    let mut out = vec![0; values.len() / 2];
    pack_half_pairs_into(values, &mut out)?;
    Ok(out)
}

pub fn unpack_half_pairs(words: &[u32]) -> Vec<f32> {
    words
        .iter()
        .flat_map(|&word| {
            let (low, high) = unpack_half2x16(word);
            [low, high]
        })
        .collect()
}

fn overflowed(value: f32, half: f16) -> bool {
    value.is_finite() && half.is_infinite()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_first_value_into_low_half() {
        assert_eq!(pack_half_pairs(&[1.0, 2.0]).unwrap(), vec![0x4000_3C00]);
        assert_eq!(pack_half2x16(1.0, 2.0), 0x4000_3C00);
        assert_eq!(unpack_half2x16(0x4000_3C00), (1.0, 2.0));
    }

    #[test]
    fn odd_length_is_rejected() {
        let err = pack_half_pairs(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            SplatvError::PreconditionViolation { values: 3, .. },
        ));

        let mut out = [0u32; 1];
        assert!(pack_half_pairs_into(&[1.0, 2.0, 3.0, 4.0], &mut out).is_err());
    }

    #[test]
    fn rounds_to_nearest_even() {
        // halfway between 1.0 and the next half (1 + 2^-10) rounds down to even
        let halfway = 1.0 + f32::powi(2.0, -11);
        // halfway between 1 + 2^-10 and 1 + 2^-9 rounds up to even
        let halfway_odd = 1.0 + 3.0 * f32::powi(2.0, -11);

        let words = pack_half_pairs(&[halfway, halfway_odd]).unwrap();
        assert_eq!(words[0] & 0xFFFF, 0x3C00);
        assert_eq!(words[0] >> 16, 0x3C02);
    }

    #[test]
    fn saturates_and_propagates_nan() {
        let mut out = [0u32; 2];
        let saturated = pack_half_pairs_into(
            &[70000.0, -70000.0, f32::NAN, f32::INFINITY],
            &mut out,
        ).unwrap();

        assert_eq!(saturated, 2);
        assert_eq!(out[0], 0xFC00_7C00);

        let (low, high) = unpack_half2x16(out[1]);
        assert!(low.is_nan());
        assert_eq!(high, f32::INFINITY);
    }

    #[test]
    fn unpack_restores_order() {
        let values = [0.5, -0.25, 3.0, 0.0];
        let words = pack_half_pairs(&values).unwrap();
        assert_eq!(unpack_half_pairs(&words), values.to_vec());
    }
}
