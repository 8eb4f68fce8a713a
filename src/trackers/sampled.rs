// Copyright @yucwang 2026

use crate::core::error::{ Result, SimulationError };
use crate::core::interaction::HitRecord;
use crate::core::tracker::PositionTracker;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Forwards only a regular subset of the `n x n` ray grid to `inner`, so a
/// viewer sees roughly `visible x visible` paths per frequency. Frequency and
/// model notifications always pass through.
#[derive(Debug, Clone)]
pub struct SampledTracker<T: PositionTracker> {
    inner: T,
    rays_along_axis: usize,
    step: usize,
    index: usize,
    forwarding: bool,
}

impl<T: PositionTracker> SampledTracker<T> {
    pub fn new(inner: T, rays_along_axis: usize, visible: usize) -> Result<Self> {
        if visible == 0 || visible > rays_along_axis {
            return Err(SimulationError::InvalidSampling { total: rays_along_axis, visible });
        }
        let step = (rays_along_axis + visible - 1) / visible;
        Ok(Self { inner, rays_along_axis, step, index: 0, forwarding: false })
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn is_visible(&self, index: usize) -> bool {
        let row = index / self.rays_along_axis;
        let col = index % self.rays_along_axis;
        row % self.step == 0 && col % self.step == 0
    }
}

impl<T: PositionTracker> PositionTracker for SampledTracker<T> {
    fn begin_frequency(&mut self, frequency: Float) {
        self.index = 0;
        self.inner.begin_frequency(frequency);
    }

    fn begin_tracking(&mut self, ray: &Ray3f) {
        self.forwarding = self.is_visible(self.index);
        self.index += 1;
        if self.forwarding {
            self.inner.begin_tracking(ray);
        }
    }

    fn on_hit(&mut self, hit: &HitRecord) {
        if self.forwarding {
            self.inner.on_hit(hit);
        }
    }

    fn end_tracking(&mut self) {
        if self.forwarding {
            self.inner.end_tracking();
        }
        self.forwarding = false;
    }

    fn end_frequency(&mut self) {
        self.inner.end_frequency();
    }

    fn switch_to_reference_model(&mut self) {
        self.inner.switch_to_reference_model();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collection::EnergyCollectionPolicy;
    use crate::core::scene::Scene;
    use crate::core::simulator::Simulator;
    use crate::core::tracer::RayTracer;
    use crate::emitters::offset::NoOffset;
    use crate::emitters::point_speaker::PointSpeaker;
    use crate::math::constants::{ Constants, Vector3f };
    use crate::policies::full_capture::FullCapture;
    use crate::trackers::recording::RecordingTracker;

    #[test]
    fn test_sampled_tracker_rejects_bad_sampling() {
        assert!(matches!(SampledTracker::new(RecordingTracker::new(), 9, 0),
                         Err(SimulationError::InvalidSampling { total: 9, visible: 0 })));
        assert!(SampledTracker::new(RecordingTracker::new(), 3, 4).is_err());
        assert_eq!(SampledTracker::new(RecordingTracker::new(), 10, 3).unwrap().step(), 4);
    }

    #[test]
    fn test_sampled_tracker_keeps_grid_subset() {
        let constants = Constants::default();
        let scene = Scene::reference_model(1.0, &constants);
        let tracer = RayTracer::new(&scene, &constants);
        let speaker = PointSpeaker::new(Vector3f::zeros(), 9, 500.0).unwrap();
        let policy: &dyn EnergyCollectionPolicy = &FullCapture;
        let simulator = Simulator::new(&tracer, &speaker, &NoOffset, policy);

        let mut tracker = SampledTracker::new(RecordingTracker::new(), 9, 3).unwrap();
        simulator.run(&[500.0, 1000.0], &mut tracker).unwrap();

        let recording = tracker.into_inner();
        assert_eq!(recording.passes().len(), 2);
        for pass in recording.passes() {
            assert_eq!(pass.paths.len(), 9);
            assert!(pass.paths.iter().all(|path| path.hits.len() == 1));
        }
    }
}
