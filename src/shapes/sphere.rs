// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::shape::Shape;
use crate::math::constants::{ Constants, Float, Vector3f };
use crate::math::ray::Ray3f;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    /// `None` unless `radius` is positive and finite.
    pub fn new(center: Vector3f, radius: Float) -> Option<Self> {
        if radius > 0.0 && radius.is_finite() {
            Some(Self { center, radius })
        } else {
            None
        }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Strictly inside; points on the surface are outside.
    pub fn is_vec_inside(&self, p: &Vector3f) -> bool {
        (p - self.center).norm_squared() < self.radius * self.radius
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f, _frequency: Float, constants: &Constants) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let b = ray.dir().dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t = if c < 0.0 {
            // Origin inside: the near root lies behind.
            -b + root
        } else {
            let near = -b - root;
            let far = -b + root;
            if near > constants.accuracy {
                near
            } else if far > constants.accuracy {
                far
            } else {
                return None;
            }
        };
        if t <= 0.0 {
            return None;
        }

        let p = ray.at(t);
        Some(HitRecord::new(t, p, self.normal_at(&p)))
    }

    fn normal_at(&self, p: &Vector3f) -> Vector3f {
        (p - self.center) / self.radius
    }
}
