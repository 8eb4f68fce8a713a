// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::simulator::SweepResult;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Observes ray paths while the simulator runs. Never influences results.
pub trait PositionTracker {
    fn begin_frequency(&mut self, _frequency: Float) {}

    /// A new ray leaves the source.
    fn begin_tracking(&mut self, _ray: &Ray3f) {}

    fn on_hit(&mut self, _hit: &HitRecord) {}

    fn end_tracking(&mut self) {}

    fn end_frequency(&mut self) {}

    /// Following runs trace the free-field reference model.
    fn switch_to_reference_model(&mut self) {}
}

/// Tracker that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracker;

impl PositionTracker for NullTracker {}

/// Which scene a sweep result was computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Scene,
    Reference,
}

/// Receives finished sweep results for reporting or persistence.
pub trait ResultsSink {
    fn consume(&mut self, kind: ModelKind, results: &SweepResult);
}
