// Copyright @yucwang 2026

use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

/// A ray leaving the source together with the energy it carries [W].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedRay {
    pub index: usize,
    pub ray: Ray3f,
    pub energy: Float,
}

/// Perturbs generated directions to break up sampling artifacts.
pub trait RayOffset: Sync {
    /// New unit direction for the `index`-th ray, whose grid direction is the
    /// unit vector `direction`. Must depend on nothing but its arguments and
    /// the strategy's own settings.
    fn offset(&self, direction: Vector3f, index: usize) -> Vector3f;
}

/// Produces the rays a source emits at one frequency.
pub trait RayFactory: Sync {
    fn generate(&self, frequency: Float, offset: &dyn RayOffset) -> Vec<EmittedRay>;

    /// Total energy of one `generate` call [W].
    fn source_power(&self) -> Float;
}
