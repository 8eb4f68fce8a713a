// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};
use super::vector::unit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    /// Builds a ray with a normalized direction. Returns `None` when `d` is
    /// too short to define a direction.
    pub fn new(o: Vector3f, d: Vector3f) -> Option<Self> {
        Some(Self { origin: o, dir: unit(&d)? })
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */
