use std::marker::Copy;

use bytemuck::{
    Pod,
    Zeroable,
};
use serde::{
    Deserialize,
    Serialize,
};


pub type Position = [f32; 3];

pub const MOTION_COEFF_COUNT: usize = 9;
pub const OMEGA_COEFF_COUNT: usize = 4;


/// A spacetime gaussian as stored in the source point cloud.
///
/// Scales, opacity, and temporal scale are kept in their activation-space
/// encoding (log, logit, log); use the accessors for the activated values.
#[derive(
    Clone,
    Debug,
    Default,
    Copy,
    PartialEq,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Splat {
    pub position: Position,
    pub rotation: [f32; 4],
    pub log_scale: [f32; 3],
    pub logit_opacity: f32,
    pub color_dc: [f32; 3],
    pub motion: [f32; MOTION_COEFF_COUNT],
    pub omega: [f32; OMEGA_COEFF_COUNT],
    pub trbf_center: f32,
    pub log_trbf_scale: f32,
}

impl Splat {
    pub fn scale(&self) -> [f32; 3] {
        self.log_scale.map(exp_f32)
    }

    pub fn opacity(&self) -> f32 {
        sigmoid(self.logit_opacity)
    }

    pub fn trbf_scale(&self) -> f32 {
        exp_f32(self.log_trbf_scale)
    }

    /// Negated effective volume times opacity, ascending order puts the most
    /// visible splats first.
    pub fn priority_key(&self) -> f32 {
        let volume = (self.log_scale[0] + self.log_scale[1] + self.log_scale[2]).exp();
        -volume / (1.0 + (-self.logit_opacity).exp())
    }
}


// activations are evaluated in f64 and narrowed once
pub(crate) fn exp_f32(v: f32) -> f32 {
    (v as f64).exp() as f32
}

pub(crate) fn sigmoid(v: f32) -> f32 {
    (1.0 / (1.0 + (-(v as f64)).exp())) as f32
}
