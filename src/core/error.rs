// Copyright @yucwang 2026

use crate::math::constants::Float;
use thiserror::Error;

/// Configuration problems, reported before any ray is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("ray grid resolution must be positive")]
    InvalidRayGrid,

    #[error("collector count must be positive")]
    InvalidCollectorCount,

    #[error("scene holds {actual} collectors but {expected} were configured")]
    CollectorCountMismatch { expected: usize, actual: usize },

    #[error("frequency list is empty")]
    EmptyFrequencies,

    #[error("invalid frequency: {0} Hz")]
    InvalidFrequency(Float),

    #[error("frequency {0} Hz appears more than once")]
    DuplicateFrequency(Float),

    #[error("source power must be positive and finite, got {0} W")]
    InvalidSourcePower(Float),

    #[error("model size must be positive and finite, got {0}")]
    InvalidModelSize(Float),

    #[error("jitter angle must lie in [0, pi], got {0} rad")]
    InvalidJitterAngle(Float),

    #[error("cannot sample {visible}x{visible} of {total}x{total} trackings")]
    InvalidSampling { total: usize, visible: usize },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
