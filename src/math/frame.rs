// Copyright @yucwang 2023

use crate::math::constants::{ Vector3f };

/// Orthonormal basis; `z` is the axis directions are built around.
pub struct Frame {
    x: Vector3f,
    y: Vector3f,
    z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    /// Frame around the unit vector `n`.
    pub fn from_z(n: Vector3f) -> Frame {
        let up = if n.z.abs() < 0.999 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let x = n.cross(&up).normalize();
        let y = n.cross(&x).normalize();
        Frame { x, y, z: n }
    }

    pub fn to_local(&self, v: Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}
