// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Share of a ray's remaining energy credited to the collector it struck.
pub trait EnergyCollectionPolicy: Sync {
    fn collect(&self, ray: &Ray3f, hit: &HitRecord, energy: Float) -> Float;
}
