// Copyright @yucwang 2021

pub mod collection;
pub mod collector;
pub mod config;
pub mod emitter;
pub mod error;
pub mod interaction;
pub mod material;
pub mod rng;
pub mod scene;
pub mod scene_manager;
pub mod shape;
pub mod simulator;
pub mod tracer;
pub mod tracker;
