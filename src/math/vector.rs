// Copyright @yucwang 2026

use super::constants::{ Float, Vector3f };

/// Shortest vector length that still defines a direction.
pub const MIN_NORM: Float = 1e-12;

/// Normalized copy of `v`, or `None` for (near) zero vectors.
pub fn unit(v: &Vector3f) -> Option<Vector3f> {
    v.try_normalize(MIN_NORM)
}

/// Mirrors `d` about the plane with unit normal `n`: d - 2(d.n)n.
pub fn reflect(d: &Vector3f, n: &Vector3f) -> Vector3f {
    d - 2.0 * d.dot(n) * n
}

/// `n` flipped, if needed, to point against `d`.
pub fn face_forward(n: &Vector3f, d: &Vector3f) -> Vector3f {
    if n.dot(d) > 0.0 {
        -n
    } else {
        *n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit() {
        let v = unit(&Vector3f::new(3.0, 4.0, 12.0)).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-8);
        assert!((v.x - 3.0 / 13.0).abs() < 1e-12);
        assert!(unit(&Vector3f::zeros()).is_none());
    }

    #[test]
    fn test_reflect() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let d = Vector3f::new(1.0, 0.0, -1.0).normalize();
        let r = reflect(&d, &n);
        assert!((r - Vector3f::new(1.0, 0.0, 1.0).normalize()).norm() < 1e-12);
        assert!((r.norm() - 1.0).abs() < 1e-12);

        // Orientation of the normal does not matter.
        assert!((reflect(&d, &-n) - r).norm() < 1e-12);
    }

    #[test]
    fn test_face_forward() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(face_forward(&n, &Vector3f::new(0.0, 1.0, 0.0)), -n);
        assert_eq!(face_forward(&n, &Vector3f::new(0.0, -1.0, 0.0)), n);
    }
}
