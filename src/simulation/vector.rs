//! 2D vector type used throughout the engine
//!
//! `NVec2` is a plain nalgebra `Vector2<f64>`: addition, in-place
//! accumulation (`+=`) and `magnitude()` come straight from nalgebra.
//! [`Vec2Ext`] adds the one operation nalgebra has no equivalent for, a
//! normalization that never divides by less than a fixed floor.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Smallest denominator `normalize_floored` will divide by
pub const EPSILON: f64 = 1e-8;

pub trait Vec2Ext {
    /// `self / max(|self|, eps)`
    ///
    /// Always finite for finite input. A zero vector comes back as zero
    /// instead of NaN.
    fn normalize_floored(&self, eps: f64) -> NVec2;
}

impl Vec2Ext for NVec2 {
    fn normalize_floored(&self, eps: f64) -> NVec2 {
        let div = self.magnitude().max(eps);
        NVec2::new(self.x / div, self.y / div)
    }
}
