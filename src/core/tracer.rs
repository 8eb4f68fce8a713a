// Copyright @yucwang 2026

use crate::core::interaction::{ HitRecord, HitTarget };
use crate::core::scene::Scene;
use crate::math::constants::{ Constants, Float };
use crate::math::ray::Ray3f;
use crate::math::vector::{ face_forward, reflect };

/// Where the segment being traced started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Straight from the source. Ray density already encodes the source's
    /// spreading, so no extra loss is applied: a rigid obstacle reflects the
    /// first hit losslessly whatever its distance from the source.
    Direct,
    /// From a reflection point; spreading loss applies on the next bounce.
    Reflected,
}

/// Outcome of one propagation step.
#[derive(Debug, Clone, PartialEq)]
pub enum HitEvent {
    /// A collector was struck. Terminal.
    Absorbed { collector: usize, incidence_angle: Float, hit: HitRecord },
    /// An obstacle was struck; tracing continues with `ray`, its energy
    /// scaled by `attenuation`.
    Reflected { ray: Ray3f, attenuation: Float, hit: HitRecord },
    /// Nothing was struck.
    Escaped,
}

/// Energy factor `(r0 / (r0 + d))^2` for a segment of length `d`.
pub fn spreading_factor(distance: Float, reference_distance: Float) -> Float {
    let ratio = reference_distance / (reference_distance + distance.max(0.0));
    ratio * ratio
}

pub struct RayTracer<'a> {
    scene: &'a Scene,
    constants: &'a Constants,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene, constants: &'a Constants) -> Self {
        Self { scene, constants }
    }

    pub fn scene(&self) -> &Scene {
        self.scene
    }

    pub fn constants(&self) -> &Constants {
        self.constants
    }

    pub fn trace(&self, ray: &Ray3f, frequency: Float, leg: Leg) -> HitEvent {
        let hit = match self.scene.nearest_hit(ray, frequency, self.constants) {
            Some(hit) => hit,
            None => return HitEvent::Escaped,
        };

        match hit.target() {
            Some(HitTarget::Collector(collector)) => {
                let cos_theta = ray.dir().dot(&hit.normal()).abs().min(1.0);
                HitEvent::Absorbed { collector, incidence_angle: cos_theta.acos(), hit }
            }
            Some(HitTarget::Obstacle(index)) => {
                let obstacle = match self.scene.obstacle(index) {
                    Some(obstacle) => obstacle,
                    None => return HitEvent::Escaped,
                };
                let facing = face_forward(&hit.normal(), &ray.dir());
                let origin = hit.p() + facing * self.constants.accuracy;
                let reflected = match Ray3f::new(origin, reflect(&ray.dir(), &hit.normal())) {
                    Some(r) => r,
                    None => return HitEvent::Escaped,
                };

                let spreading = match leg {
                    Leg::Direct => 1.0,
                    Leg::Reflected => spreading_factor(hit.t(), self.constants.reference_distance),
                };
                let attenuation = obstacle.reflection_coefficient(frequency) * spreading;
                HitEvent::Reflected { ray: reflected, attenuation, hit }
            }
            None => HitEvent::Escaped,
        }
    }
}
