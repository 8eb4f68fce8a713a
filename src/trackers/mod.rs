// Copyright @yucwang 2026

pub mod log_sink;
pub mod recording;
pub mod sampled;
