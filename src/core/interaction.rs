// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

/// Entity of the scene a ray struck, by position in the scene's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Obstacle(usize),
    Collector(usize),
}

/// Outcome of a successful intersection test. Only built on a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    t: Float,
    p: Vector3f,
    normal: Vector3f,
    target: Option<HitTarget>,
}

impl HitRecord {
    pub fn new(new_t: Float, new_p: Vector3f, new_normal: Vector3f) -> Self {
        Self { t: new_t, p: new_p, normal: new_normal, target: None }
    }

    /// Distance travelled along the (unit) ray direction.
    pub fn t(&self) -> Float {
        self.t
    }

    /// Collision point.
    pub fn p(&self) -> Vector3f {
        self.p
    }

    /// Unit surface normal at `p`, oriented by the surface, not by the ray.
    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn target(&self) -> Option<HitTarget> {
        self.target
    }

    pub fn with_target(&self, target: HitTarget) -> Self {
        Self { target: Some(target), ..*self }
    }
}
