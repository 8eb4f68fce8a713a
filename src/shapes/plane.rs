// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::shape::Shape;
use crate::math::constants::{ Constants, Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::vector::unit;

/// Infinite plane through `point`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vector3f,
    normal: Vector3f,
}

impl Plane {
    pub fn new(point: Vector3f, normal: Vector3f) -> Option<Self> {
        Some(Self { point, normal: unit(&normal)? })
    }

    pub fn point(&self) -> Vector3f {
        self.point
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    /// Hit time of `ray`, rejecting near parallel rays and self hits.
    pub(crate) fn hit_time(&self, ray: &Ray3f, constants: &Constants) -> Option<Float> {
        let n_dot_dir = self.normal.dot(&ray.dir());
        if n_dot_dir.abs() < constants.parallel_threshold {
            return None;
        }

        let t = (self.point - ray.origin()).dot(&self.normal) / n_dot_dir;
        if t > constants.accuracy {
            Some(t)
        } else {
            None
        }
    }
}

impl Shape for Plane {
    fn ray_intersection(&self, ray: &Ray3f, _frequency: Float, constants: &Constants) -> Option<HitRecord> {
        let t = self.hit_time(ray, constants)?;
        let p = ray.at(t);
        Some(HitRecord::new(t, p, self.normal_at(&p)))
    }

    fn normal_at(&self, _p: &Vector3f) -> Vector3f {
        self.normal
    }
}
