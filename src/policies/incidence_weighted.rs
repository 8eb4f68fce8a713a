// Copyright @yucwang 2026

use crate::core::collection::EnergyCollectionPolicy;
use crate::core::interaction::HitRecord;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Scales the captured energy by the cosine of the incidence angle, so
/// grazing rays deliver little.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidenceWeighted;

impl EnergyCollectionPolicy for IncidenceWeighted {
    fn collect(&self, ray: &Ray3f, hit: &HitRecord, energy: Float) -> Float {
        energy * ray.dir().dot(&hit.normal()).abs().min(1.0)
    }
}
