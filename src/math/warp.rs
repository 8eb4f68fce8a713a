// Copyright @yucwang 2023

use super::constants::{ PI, Float, Vector2f, Vector3f };

/// Maps the unit square onto the unit sphere preserving area: `u.x` picks
/// the height, `u.y` the azimuth.
pub fn square_to_sphere(u: &Vector2f) -> Vector3f {
    let z: Float = 1. - 2. * u.x;
    let r: Float = (1. - z * z).max(0.).sqrt();
    let phi: Float = 2. * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Maps the unit square uniformly onto the cap of half angle `max_angle`
/// around +z.
pub fn square_to_cap(u: &Vector2f, max_angle: Float) -> Vector3f {
    let cos_max = max_angle.cos();
    let z: Float = 1. - u.x * (1. - cos_max);
    let r: Float = (1. - z * z).max(0.).sqrt();
    let phi: Float = 2. * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// `count` unit vectors spread evenly over the sphere along a golden-angle
/// spiral. Deterministic for a given count.
pub fn fibonacci_sphere(count: usize) -> Vec<Vector3f> {
    let golden_angle = PI * (3. - (5.0 as Float).sqrt());
    (0..count)
        .map(|i| {
            let z = 1. - (2 * i + 1) as Float / count as Float;
            let r = (1. - z * z).max(0.).sqrt();
            let phi = golden_angle * i as Float;
            Vector3f::new(r * phi.cos(), r * phi.sin(), z)
        })
        .collect()
}
