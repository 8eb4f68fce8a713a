// Copyright @yucwang 2026

use crate::core::collection::EnergyCollectionPolicy;
use crate::core::config::SimulationProperties;
use crate::core::error::Result;
use crate::core::scene::Scene;
use crate::core::simulator::{ Simulator, SweepResult };
use crate::core::tracer::RayTracer;
use crate::core::tracker::{ ModelKind, PositionTracker, ResultsSink };
use crate::emitters::point_speaker::PointSpeaker;
use crate::math::constants::{ Constants, Float, Vector3f };

/// Levels of one frequency relative to the free field, in dB, per collector.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeLevels {
    pub frequency: Float,
    pub levels: Vec<Option<Float>>,
}

/// Sweeps over the configured scene and over the reference model.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRun {
    pub scene: SweepResult,
    pub reference: SweepResult,
}

impl SceneRun {
    /// `10 * log10(E / E_ref)` for every collector both runs share. `None`
    /// wherever either energy is zero.
    pub fn relative_levels_db(&self) -> Vec<RelativeLevels> {
        self.scene
            .iter()
            .map(|pass| {
                let reference = self.reference.get(pass.frequency).unwrap_or(&[]);
                let levels = pass
                    .energies
                    .iter()
                    .zip(reference.iter())
                    .map(|(&e, &e_ref)| {
                        if e > 0.0 && e_ref > 0.0 {
                            Some(10.0 * (e / e_ref).log10())
                        } else {
                            None
                        }
                    })
                    .collect();
                RelativeLevels { frequency: pass.frequency, levels }
            })
            .collect()
    }
}

/// Owns one simulation run: validates the properties against the scene,
/// sweeps the scene, then sweeps a reference model of the configured size
/// with an identical source so the two can be compared.
pub struct SceneManager<'a> {
    scene: &'a Scene,
    properties: SimulationProperties,
    constants: Constants,
    policy: &'a dyn EnergyCollectionPolicy,
}

impl<'a> SceneManager<'a> {
    pub fn new(scene: &'a Scene,
               properties: SimulationProperties,
               constants: Constants,
               policy: &'a dyn EnergyCollectionPolicy) -> Result<Self> {
        properties.validate_for(scene)?;
        Ok(Self { scene, properties, constants, policy })
    }

    pub fn properties(&self) -> &SimulationProperties {
        &self.properties
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn run(&self, tracker: &mut dyn PositionTracker, sink: &mut dyn ResultsSink) -> Result<SceneRun> {
        let properties = &self.properties;
        let offset = properties.offset.build()?;

        log::info!("Simulating {} frequencies with {}x{} rays over {} obstacles and {} collectors.",
                   properties.frequencies.len(), properties.num_of_rays_squared, properties.num_of_rays_squared,
                   self.scene.obstacles().len(), self.scene.collectors().len());
        let speaker = PointSpeaker::new(properties.source_position,
                                        properties.num_of_rays_squared,
                                        properties.source_power)?;
        let tracer = RayTracer::new(self.scene, &self.constants);
        let scene = Simulator::new(&tracer, &speaker, offset.as_ref(), self.policy)
            .run(&properties.frequencies, tracker)?;
        sink.consume(ModelKind::Scene, &scene);

        let reference_model = Scene::reference_model(properties.model_size, &self.constants);
        if reference_model.collectors().len() != self.scene.collectors().len() {
            log::warn!("Reference model holds {} collectors, scene holds {}; only shared indices are comparable.",
                       reference_model.collectors().len(), self.scene.collectors().len());
        }
        tracker.switch_to_reference_model();
        let reference_speaker = PointSpeaker::new(Vector3f::zeros(),
                                                  properties.num_of_rays_squared,
                                                  properties.source_power)?;
        let reference_tracer = RayTracer::new(&reference_model, &self.constants);
        let reference = Simulator::new(&reference_tracer, &reference_speaker, offset.as_ref(), self.policy)
            .run(&properties.frequencies, tracker)?;
        sink.consume(ModelKind::Reference, &reference);

        Ok(SceneRun { scene, reference })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collector::EnergyCollector;
    use crate::core::error::SimulationError;
    use crate::core::scene::Obstacle;
    use crate::core::simulator::FrequencyEnergies;
    use crate::core::tracker::NullTracker;
    use crate::materials::octave_band::OctaveBandAbsorption;
    use crate::policies::full_capture::FullCapture;
    use crate::shapes::rectangle::Rectangle;
    use crate::trackers::recording::RecordingTracker;
    use std::sync::Arc;

    #[derive(Default)]
    struct KeepingSink {
        received: Vec<(ModelKind, SweepResult)>,
    }

    impl ResultsSink for KeepingSink {
        fn consume(&mut self, kind: ModelKind, results: &SweepResult) {
            self.received.push((kind, results.clone()));
        }
    }

    fn sweep(passes: &[(Float, Vec<Float>)]) -> SweepResult {
        let mut result = SweepResult::default();
        for (frequency, energies) in passes {
            result.push(FrequencyEnergies { frequency: *frequency, energies: energies.clone() });
        }
        result
    }

    #[test]
    fn test_scene_manager_rejects_mismatched_collectors() {
        let constants = Constants::default();
        let scene = Scene::new(Vec::new(), vec![EnergyCollector::new(Vector3f::new(0.0, 0.0, 4.0), 1.0).unwrap()]);
        let manager = SceneManager::new(&scene, SimulationProperties::default(), constants, &FullCapture);
        assert_eq!(manager.err(), Some(SimulationError::CollectorCountMismatch { expected: 37, actual: 1 }));
    }

    #[test]
    fn test_scene_manager_runs_scene_then_reference() {
        let constants = Constants::default();
        let scene = Scene::reference_model(1.0, &constants);
        let properties = SimulationProperties {
            frequencies: vec![500.0, 2000.0],
            num_of_rays_squared: 6,
            ..SimulationProperties::default()
        };
        let manager = SceneManager::new(&scene, properties, constants, &FullCapture).unwrap();

        let mut tracker = RecordingTracker::new();
        let mut sink = KeepingSink::default();
        let run = manager.run(&mut tracker, &mut sink).unwrap();

        assert_eq!(sink.received.len(), 2);
        assert_eq!(sink.received[0].0, ModelKind::Scene);
        assert_eq!(sink.received[1].0, ModelKind::Reference);
        assert_eq!(sink.received[0].1, run.scene);
        assert_eq!(run.scene, run.reference);

        let models: Vec<ModelKind> = tracker.passes().iter().map(|pass| pass.model).collect();
        assert_eq!(models, vec![ModelKind::Scene, ModelKind::Scene, ModelKind::Reference, ModelKind::Reference]);
        assert!(tracker.passes().iter().all(|pass| pass.paths.len() == 36));

        for levels in run.relative_levels_db() {
            for level in levels.levels.into_iter().flatten() {
                assert!(level.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_scene_manager_absorbing_panel_lowers_levels() {
        let constants = Constants::default();
        let reference = Scene::reference_model(1.0, &constants);
        let panel = Rectangle::new(Vector3f::new(0.0, 0.0, 1.0),
                                   Vector3f::new(3.0, 0.0, 0.0),
                                   Vector3f::new(0.0, 3.0, 0.0)).unwrap();
        let material = OctaveBandAbsorption::new([0.1, 0.2, 0.4, 0.6, 0.8, 0.9]);
        let scene = Scene::new(vec![Obstacle::new(Arc::new(panel), Arc::new(material))],
                               reference.collectors().to_vec());

        let properties = SimulationProperties {
            frequencies: vec![125.0, 4000.0],
            num_of_rays_squared: 12,
            ..SimulationProperties::default()
        };
        let manager = SceneManager::new(&scene, properties, constants, &FullCapture).unwrap();
        let run = manager.run(&mut NullTracker, &mut KeepingSink::default()).unwrap();

        let low: Float = run.scene.get(125.0).unwrap().iter().sum();
        let high: Float = run.scene.get(4000.0).unwrap().iter().sum();
        let free: Float = run.reference.get(125.0).unwrap().iter().sum();
        assert!(low < free);
        assert!(high < low);
    }

    #[test]
    fn test_relative_levels_db() {
        let run = SceneRun {
            scene: sweep(&[(1000.0, vec![1.0, 0.0, 10.0])]),
            reference: sweep(&[(1000.0, vec![10.0, 5.0, 10.0])]),
        };
        let levels = run.relative_levels_db();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].frequency, 1000.0);
        assert!((levels[0].levels[0].unwrap() + 10.0).abs() < 1e-12);
        assert_eq!(levels[0].levels[1], None);
        assert!(levels[0].levels[2].unwrap().abs() < 1e-12);
    }
}
