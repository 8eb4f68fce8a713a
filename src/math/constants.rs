/* Copyright 2020 @Yuchen Wong */

use nalgebra::{ Vector2, Vector3 };

pub type Float = f64;
pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;

pub const PI: Float = std::f64::consts::PI;

/// Numeric tolerances and propagation limits shared by the geometry kernel
/// and the simulator. Passed by reference so tests can tighten or loosen them.
#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    /// Minimum accepted hit time, surface offset of reflected rays and
    /// tie window of the nearest-hit query.
    pub accuracy: Float,
    /// Minimum |direction . normal| for a ray to be tested against a plane.
    pub parallel_threshold: Float,
    /// Radius of the collector sphere of the reference model at size 1 [m].
    pub simulation_radius: Float,
    /// Number of collectors of the reference model.
    pub population: usize,
    /// Distance at which geometric spreading starts to bite [m].
    pub reference_distance: Float,
    /// Maximum number of reflections of a single ray.
    pub max_bounces: u32,
    /// Fraction of its emitted energy below which a ray is discarded.
    pub energy_floor: Float,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            accuracy: 1e-8,
            parallel_threshold: 1e-6,
            simulation_radius: 4.0,
            population: 37,
            reference_distance: 1.0,
            max_bounces: 1000,
            energy_floor: 1e-10,
        }
    }
}
