// Copyright @yucwang 2023

use crate::core::interaction::HitRecord;
use crate::math::constants::{ Constants, Float, Vector3f };
use crate::math::ray::Ray3f;

/// Geometry an obstacle or collector is made of.
pub trait Shape: Send + Sync {
    /// Nearest accepted intersection of `ray` with the surface. `frequency`
    /// is available to frequency dependent geometry; plain shapes ignore it.
    fn ray_intersection(&self, ray: &Ray3f, frequency: Float, constants: &Constants) -> Option<HitRecord>;

    /// Unit normal of the surface at the point `p` on it.
    fn normal_at(&self, p: &Vector3f) -> Vector3f;
}
