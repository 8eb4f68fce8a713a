// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::shape::Shape;
use crate::math::constants::{ Constants, Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::shapes::sphere::Sphere;

/// Spherical capture surface. A ray striking it ends there.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyCollector {
    sphere: Sphere,
}

impl EnergyCollector {
    /// `None` unless `radius` is positive and finite.
    pub fn new(center: Vector3f, radius: Float) -> Option<Self> {
        Some(Self { sphere: Sphere::new(center, radius)? })
    }

    pub fn center(&self) -> Vector3f {
        self.sphere.center()
    }

    pub fn radius(&self) -> Float {
        self.sphere.radius()
    }

    pub fn ray_intersection(&self, ray: &Ray3f, frequency: Float, constants: &Constants) -> Option<HitRecord> {
        self.sphere.ray_intersection(ray, frequency, constants)
    }
}
