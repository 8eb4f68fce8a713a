// Copyright @yucwang 2026

use crate::math::constants::Float;

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generator for the `stream`-th independent sequence of `seed`.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mut rng = Self::new(seed.rotate_left(32) ^ stream);
        rng.next_u32();
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform sample in [0, 1).
    pub fn next_float(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float + 1.0)
    }
}
