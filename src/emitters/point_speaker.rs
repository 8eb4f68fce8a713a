// Copyright @yucwang 2026

use crate::core::emitter::{ EmittedRay, RayFactory, RayOffset };
use crate::core::error::{ Result, SimulationError };
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::ray::Ray3f;
use crate::math::warp::square_to_sphere;

/// Azimuthal shift between consecutive grid rows, as a fraction of a cell.
/// Irrational, so rows never line up into meridians.
const ROW_STAGGER: Float = 0.618_033_988_749_894_9;

/// Omnidirectional point source. Emits `n * n` rays on an equal-area grid
/// over the sphere of directions, sharing the source power evenly. Each row
/// of the grid is rotated by `ROW_STAGGER` cells against the previous one.
#[derive(Debug, Clone)]
pub struct PointSpeaker {
    position: Vector3f,
    rays_along_axis: usize,
    source_power: Float,
}

impl PointSpeaker {
    pub fn new(position: Vector3f, rays_along_axis: usize, source_power: Float) -> Result<Self> {
        if rays_along_axis == 0 {
            return Err(SimulationError::InvalidRayGrid);
        }
        if !(source_power > 0.0 && source_power.is_finite()) {
            return Err(SimulationError::InvalidSourcePower(source_power));
        }
        Ok(Self { position, rays_along_axis, source_power })
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn ray_count(&self) -> usize {
        self.rays_along_axis * self.rays_along_axis
    }

    pub fn ray_energy(&self) -> Float {
        self.source_power / self.ray_count() as Float
    }
}

impl RayFactory for PointSpeaker {
    fn generate(&self, _frequency: Float, offset: &dyn RayOffset) -> Vec<EmittedRay> {
        let n = self.rays_along_axis;
        let energy = self.ray_energy();
        let mut rays = Vec::with_capacity(self.ray_count());
        for i in 0..n {
            for j in 0..n {
                let index = i * n + j;
                let azimuth = (j as Float + 0.5 + i as Float * ROW_STAGGER) / n as Float;
                let u = Vector2f::new((i as Float + 0.5) / n as Float, azimuth.fract());
                let direction = offset.offset(square_to_sphere(&u), index);
                if let Some(ray) = Ray3f::new(self.position, direction) {
                    rays.push(EmittedRay { index, ray, energy });
                }
            }
        }
        rays
    }

    fn source_power(&self) -> Float {
        self.source_power
    }
}
