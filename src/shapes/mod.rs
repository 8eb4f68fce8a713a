// Copyright @yucwang 2026

pub mod plane;
pub mod rectangle;
pub mod sphere;
