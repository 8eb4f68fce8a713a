// Copyright @yucwang 2026

pub mod offset;
pub mod point_speaker;
