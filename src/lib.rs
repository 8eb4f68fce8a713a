// Copyright @yucwang 2021

pub mod core;
pub mod emitters;
pub mod materials;
pub mod math;
pub mod policies;
pub mod shapes;
pub mod trackers;
