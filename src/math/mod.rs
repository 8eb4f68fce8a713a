// Copyright 2020 @TwoCookingMice

pub mod constants;
pub mod frame;
pub mod ray;
pub mod vector;
pub mod warp;
