// Copyright @yucwang 2026

use crate::core::emitter::RayOffset;
use crate::core::error::{ Result, SimulationError };
use crate::core::scene::Scene;
use crate::emitters::offset::{ NoOffset, RandomOffset };
use crate::math::constants::{ Float, Vector3f };

/// How generated ray directions are perturbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetStrategy {
    None,
    Jitter { seed: u64, max_angle: Float },
}

impl OffsetStrategy {
    pub fn build(&self) -> Result<Box<dyn RayOffset>> {
        match *self {
            OffsetStrategy::None => Ok(Box::new(NoOffset)),
            OffsetStrategy::Jitter { seed, max_angle } => Ok(Box::new(RandomOffset::new(seed, max_angle)?)),
        }
    }
}

/// Everything needed to run a sweep on a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationProperties {
    /// Source frequencies [Hz], simulated in this order.
    pub frequencies: Vec<Float>,
    /// [W]
    pub source_power: Float,
    /// Must match the number of collectors of the scene.
    pub num_of_collectors: usize,
    /// Rays along each axis of the emission grid; `n` gives `n * n` rays.
    pub num_of_rays_squared: usize,
    pub offset: OffsetStrategy,
    pub source_position: Vector3f,
    /// Scale of the reference model used for comparison.
    pub model_size: Float,
}

impl Default for SimulationProperties {
    fn default() -> Self {
        Self {
            frequencies: vec![1000.0],
            source_power: 500.0,
            num_of_collectors: 37,
            num_of_rays_squared: 15,
            offset: OffsetStrategy::None,
            source_position: Vector3f::zeros(),
            model_size: 1.0,
        }
    }
}

impl SimulationProperties {
    pub fn new(frequencies: Vec<Float>) -> Self {
        Self { frequencies, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        validate_frequencies(&self.frequencies)?;
        if !(self.source_power > 0.0 && self.source_power.is_finite()) {
            return Err(SimulationError::InvalidSourcePower(self.source_power));
        }
        if self.num_of_collectors == 0 {
            return Err(SimulationError::InvalidCollectorCount);
        }
        if self.num_of_rays_squared == 0 {
            return Err(SimulationError::InvalidRayGrid);
        }
        if !(self.model_size > 0.0 && self.model_size.is_finite()) {
            return Err(SimulationError::InvalidModelSize(self.model_size));
        }
        self.offset.build().map(|_| ())
    }

    /// `validate`, plus the collector count must match `scene`.
    pub fn validate_for(&self, scene: &Scene) -> Result<()> {
        self.validate()?;
        let actual = scene.collectors().len();
        if actual != self.num_of_collectors {
            return Err(SimulationError::CollectorCountMismatch { expected: self.num_of_collectors, actual });
        }
        Ok(())
    }
}

/// Non-empty, positive, finite and pairwise distinct.
pub fn validate_frequencies(frequencies: &[Float]) -> Result<()> {
    if frequencies.is_empty() {
        return Err(SimulationError::EmptyFrequencies);
    }
    for (i, &f) in frequencies.iter().enumerate() {
        if !(f > 0.0 && f.is_finite()) {
            return Err(SimulationError::InvalidFrequency(f));
        }
        if frequencies[..i].contains(&f) {
            return Err(SimulationError::DuplicateFrequency(f));
        }
    }
    Ok(())
}
