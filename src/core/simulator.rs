// Copyright @yucwang 2026

use crate::core::collection::EnergyCollectionPolicy;
use crate::core::config::validate_frequencies;
use crate::core::emitter::{ EmittedRay, RayFactory, RayOffset };
use crate::core::error::Result;
use crate::core::tracer::{ HitEvent, Leg, RayTracer };
use crate::core::tracker::PositionTracker;
use crate::math::constants::Float;

/// Per-collector energies [W] of one frequency pass, index aligned with the
/// scene's collectors.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEnergies {
    pub frequency: Float,
    pub energies: Vec<Float>,
}

impl FrequencyEnergies {
    pub fn total(&self) -> Float {
        self.energies.iter().sum()
    }
}

/// Results of a whole sweep, in the order the frequencies were simulated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepResult {
    passes: Vec<FrequencyEnergies>,
}

impl SweepResult {
    pub fn get(&self, frequency: Float) -> Option<&[Float]> {
        self.passes
            .iter()
            .find(|pass| pass.frequency == frequency)
            .map(|pass| pass.energies.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEnergies> {
        self.passes.iter()
    }

    pub fn frequencies(&self) -> Vec<Float> {
        self.passes.iter().map(|pass| pass.frequency).collect()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub(crate) fn push(&mut self, pass: FrequencyEnergies) {
        self.passes.push(pass);
    }
}

/// How the life of a single ray ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayFate {
    Absorbed { collector: usize, energy: Float },
    Escaped,
    /// Too many reflections, or too little energy left to matter.
    Exhausted,
}

#[derive(Debug, Default, Clone, Copy)]
struct FateCounts {
    absorbed: usize,
    escaped: usize,
    exhausted: usize,
}

impl FateCounts {
    fn record(&mut self, fate: &RayFate) {
        match fate {
            RayFate::Absorbed { .. } => self.absorbed += 1,
            RayFate::Escaped => self.escaped += 1,
            RayFate::Exhausted => self.exhausted += 1,
        }
    }
}

/// Runs frequency sweeps of one source over one scene.
pub struct Simulator<'a> {
    tracer: &'a RayTracer<'a>,
    source: &'a dyn RayFactory,
    offset: &'a dyn RayOffset,
    policy: &'a dyn EnergyCollectionPolicy,
}

impl<'a> Simulator<'a> {
    pub fn new(tracer: &'a RayTracer<'a>,
               source: &'a dyn RayFactory,
               offset: &'a dyn RayOffset,
               policy: &'a dyn EnergyCollectionPolicy) -> Self {
        Self { tracer, source, offset, policy }
    }

    /// Simulates every frequency in order. The list is validated before any
    /// ray is traced.
    pub fn run(&self, frequencies: &[Float], tracker: &mut dyn PositionTracker) -> Result<SweepResult> {
        validate_frequencies(frequencies)?;

        let mut results = SweepResult::default();
        for &frequency in frequencies {
            let energies = self.run_frequency(frequency, tracker);
            let pass = FrequencyEnergies { frequency, energies };
            log::info!("{} Hz: collected {:.6} W of {:.6} W emitted.",
                       frequency, pass.total(), self.source.source_power());
            results.push(pass);
        }
        Ok(results)
    }

    /// One pass: a fresh accumulator, a fresh batch of rays, every ray traced
    /// to the end of its life.
    pub fn run_frequency(&self, frequency: Float, tracker: &mut dyn PositionTracker) -> Vec<Float> {
        tracker.begin_frequency(frequency);

        let mut accumulator = vec![0.0; self.tracer.scene().collectors().len()];
        let mut counts = FateCounts::default();
        for emitted in self.source.generate(frequency, self.offset) {
            tracker.begin_tracking(&emitted.ray);
            let fate = self.propagate(&emitted, frequency, tracker);
            tracker.end_tracking();

            if let RayFate::Absorbed { collector, energy } = fate {
                if let Some(slot) = accumulator.get_mut(collector) {
                    *slot += energy;
                }
            }
            counts.record(&fate);
        }

        tracker.end_frequency();
        log::debug!("{} Hz: {} absorbed, {} escaped, {} exhausted.",
                    frequency, counts.absorbed, counts.escaped, counts.exhausted);
        accumulator
    }

    fn propagate(&self, emitted: &EmittedRay, frequency: Float, tracker: &mut dyn PositionTracker) -> RayFate {
        let constants = self.tracer.constants();
        let energy_floor = emitted.energy * constants.energy_floor;

        let mut ray = emitted.ray;
        let mut energy = emitted.energy;
        let mut leg = Leg::Direct;
        let mut bounces: u32 = 0;
        loop {
            match self.tracer.trace(&ray, frequency, leg) {
                HitEvent::Absorbed { collector, hit, .. } => {
                    tracker.on_hit(&hit);
                    let collected = self.policy.collect(&ray, &hit, energy);
                    return RayFate::Absorbed { collector, energy: collected };
                }
                HitEvent::Escaped => return RayFate::Escaped,
                HitEvent::Reflected { ray: reflected, attenuation, hit } => {
                    tracker.on_hit(&hit);
                    bounces += 1;
                    energy *= attenuation;
                    if bounces > constants.max_bounces || energy < energy_floor {
                        return RayFate::Exhausted;
                    }
                    ray = reflected;
                    leg = Leg::Reflected;
                }
            }
        }
    }
}
