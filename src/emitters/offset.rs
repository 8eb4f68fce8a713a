// Copyright @yucwang 2026

use crate::core::emitter::RayOffset;
use crate::core::error::{ Result, SimulationError };
use crate::core::rng::LcgRng;
use crate::math::constants::{ Float, PI, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::warp::square_to_cap;

/// Leaves every direction untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOffset;

impl RayOffset for NoOffset {
    fn offset(&self, direction: Vector3f, _index: usize) -> Vector3f {
        direction
    }
}

/// Tilts each direction by a random angle of at most `max_angle`, uniformly
/// over the cap around it. Ray `i` always draws from stream `i` of `seed`.
#[derive(Debug, Clone, Copy)]
pub struct RandomOffset {
    seed: u64,
    max_angle: Float,
}

impl RandomOffset {
    pub fn new(seed: u64, max_angle: Float) -> Result<Self> {
        if !(0.0..=PI).contains(&max_angle) {
            return Err(SimulationError::InvalidJitterAngle(max_angle));
        }
        Ok(Self { seed, max_angle })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_angle(&self) -> Float {
        self.max_angle
    }
}

impl RayOffset for RandomOffset {
    fn offset(&self, direction: Vector3f, index: usize) -> Vector3f {
        let mut rng = LcgRng::for_stream(self.seed, index as u64);
        let u = Vector2f::new(rng.next_float(), rng.next_float());
        Frame::from_z(direction).from_local(square_to_cap(&u, self.max_angle))
    }
}
