// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::shape::Shape;
use crate::math::constants::{ Constants, Float, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::vector::unit;
use crate::shapes::plane::Plane;

/// Bounded planar panel spanning `center ± half_u ± half_v`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    plane: Plane,
    half_u: Vector3f,
    half_v: Vector3f,
}

impl Rectangle {
    /// `None` when the edges are degenerate or not perpendicular.
    pub fn new(center: Vector3f, half_u: Vector3f, half_v: Vector3f) -> Option<Self> {
        let normal = unit(&half_u.cross(&half_v))?;
        if half_u.dot(&half_v).abs() > 1e-9 * half_u.norm() * half_v.norm() {
            return None;
        }

        let plane = Plane::new(center, normal)?;
        Some(Self { plane, half_u, half_v })
    }

    pub fn center(&self) -> Vector3f {
        self.plane.point()
    }

    pub fn area(&self) -> Float {
        4.0 * self.half_u.norm() * self.half_v.norm()
    }

    fn local(&self, p: &Vector3f) -> (Float, Float) {
        let d = p - self.plane.point();
        (d.dot(&self.half_u) / self.half_u.norm_squared(),
         d.dot(&self.half_v) / self.half_v.norm_squared())
    }
}

impl Shape for Rectangle {
    fn ray_intersection(&self, ray: &Ray3f, _frequency: Float, constants: &Constants) -> Option<HitRecord> {
        let t = self.plane.hit_time(ray, constants)?;
        let p = ray.at(t);
        let (u, v) = self.local(&p);
        if u.abs() > 1.0 || v.abs() > 1.0 {
            return None;
        }

        Some(HitRecord::new(t, p, self.normal_at(&p)))
    }

    fn normal_at(&self, _p: &Vector3f) -> Vector3f {
        self.plane.normal()
    }
}
