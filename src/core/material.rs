// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Acoustic surface properties of an obstacle.
pub trait AcousticMaterial: Send + Sync {
    /// Fraction of incident energy absorbed at `frequency`, in [0, 1].
    fn absorption(&self, frequency: Float) -> Float;

    /// Fraction of incident energy reflected at `frequency`.
    fn reflection_coefficient(&self, frequency: Float) -> Float {
        1.0 - self.absorption(frequency).clamp(0.0, 1.0)
    }
}
