// Copyright @yucwang 2026

use crate::core::collection::EnergyCollectionPolicy;
use crate::core::interaction::HitRecord;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Collector takes everything the ray still carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullCapture;

impl EnergyCollectionPolicy for FullCapture {
    fn collect(&self, _ray: &Ray3f, _hit: &HitRecord, energy: Float) -> Float {
        energy
    }
}
