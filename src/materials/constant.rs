// Copyright @yucwang 2026

use crate::core::material::AcousticMaterial;
use crate::math::constants::Float;

/// Same absorption at every frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantAbsorption {
    absorption: Float,
}

impl ConstantAbsorption {
    /// `absorption` is clamped into [0, 1].
    pub fn new(absorption: Float) -> Self {
        Self { absorption: absorption.clamp(0.0, 1.0) }
    }

    /// Perfect mirror.
    pub fn rigid() -> Self {
        Self::new(0.0)
    }
}

impl AcousticMaterial for ConstantAbsorption {
    fn absorption(&self, _frequency: Float) -> Float {
        self.absorption
    }
}
