// Copyright @yucwang 2026

use crate::core::interaction::HitRecord;
use crate::core::tracker::{ ModelKind, PositionTracker };
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

/// Source position and the points where one ray struck something.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub origin: Vector3f,
    pub hits: Vec<Vector3f>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyPaths {
    pub model: ModelKind,
    pub frequency: Float,
    pub paths: Vec<RecordedPath>,
}

/// Keeps every tracked path in memory, grouped by frequency pass.
#[derive(Debug, Clone)]
pub struct RecordingTracker {
    model: ModelKind,
    passes: Vec<FrequencyPaths>,
    current: Option<RecordedPath>,
}

impl Default for RecordingTracker {
    fn default() -> Self {
        Self { model: ModelKind::Scene, passes: Vec::new(), current: None }
    }
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passes(&self) -> &[FrequencyPaths] {
        &self.passes
    }

    /// Paths of the latest pass at `frequency`.
    pub fn paths(&self, frequency: Float) -> Option<&[RecordedPath]> {
        self.passes
            .iter()
            .rev()
            .find(|pass| pass.frequency == frequency)
            .map(|pass| pass.paths.as_slice())
    }
}

impl PositionTracker for RecordingTracker {
    fn begin_frequency(&mut self, frequency: Float) {
        self.passes.push(FrequencyPaths { model: self.model, frequency, paths: Vec::new() });
    }

    fn begin_tracking(&mut self, ray: &Ray3f) {
        self.current = Some(RecordedPath { origin: ray.origin(), hits: Vec::new() });
    }

    fn on_hit(&mut self, hit: &HitRecord) {
        if let Some(path) = self.current.as_mut() {
            path.hits.push(hit.p());
        }
    }

    fn end_tracking(&mut self) {
        if let (Some(path), Some(pass)) = (self.current.take(), self.passes.last_mut()) {
            pass.paths.push(path);
        }
    }

    fn switch_to_reference_model(&mut self) {
        self.model = ModelKind::Reference;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_tracker_groups_paths() {
        let mut tracker = RecordingTracker::new();
        let ray = Ray3f::new(Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0)).unwrap();

        tracker.begin_frequency(500.0);
        tracker.begin_tracking(&ray);
        tracker.on_hit(&HitRecord::new(2.0, Vector3f::new(1.0, 0.0, 2.0), Vector3f::new(0.0, 0.0, -1.0)));
        tracker.end_tracking();
        tracker.begin_tracking(&ray);
        tracker.end_tracking();
        tracker.end_frequency();

        tracker.switch_to_reference_model();
        tracker.begin_frequency(500.0);
        tracker.end_frequency();

        assert_eq!(tracker.passes().len(), 2);
        assert_eq!(tracker.passes()[0].model, ModelKind::Scene);
        assert_eq!(tracker.passes()[0].paths.len(), 2);
        assert_eq!(tracker.passes()[0].paths[0].origin, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(tracker.passes()[0].paths[0].hits, vec![Vector3f::new(1.0, 0.0, 2.0)]);
        assert!(tracker.passes()[0].paths[1].hits.is_empty());

        assert_eq!(tracker.passes()[1].model, ModelKind::Reference);
        assert_eq!(tracker.paths(500.0).map(|p| p.len()), Some(0));
        assert!(tracker.paths(1000.0).is_none());
    }

    #[test]
    fn test_recording_tracker_ignores_hits_outside_tracking() {
        let mut tracker = RecordingTracker::new();
        tracker.begin_frequency(125.0);
        tracker.on_hit(&HitRecord::new(1.0, Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0)));
        tracker.end_tracking();
        assert!(tracker.paths(125.0).unwrap().is_empty());
    }
}
