//! Random point generators used for spawning meteors and placing stars.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Random point on a spherical shell with radius in `[r_min, r_max)`.
///
/// Latitude comes from `acos(2u - 1)` so points are uniform over the
/// sphere's area rather than bunched at the poles.
pub fn sample_shell<R: Rng + ?Sized>(rng: &mut R, r_min: f32, r_max: f32) -> Vec3 {
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let theta = rng.gen::<f32>() * TAU;
    let r = rng.gen_range(r_min..r_max);
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        r * sin_phi * cos_theta,
        r * sin_phi * sin_theta,
        r * cos_phi,
    )
}

/// Random point inside the axis-aligned cube `[-half_width, half_width)^3`.
pub fn sample_cube<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_width..half_width),
        rng.gen_range(-half_width..half_width),
        rng.gen_range(-half_width..half_width),
    )
}
