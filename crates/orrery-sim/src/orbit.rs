//! Rate-driven bodies: the planet's spin and the satellite's orbit.
//!
//! Both advance by `delta_secs * base_rate * multiplier`; a zero multiplier
//! freezes them. Angles are kept in [0, τ).

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use orrery_core::constants::*;
use orrery_core::state::{PlanetView, SatelliteView};

/// Per-frame interface shared by everything driven by elapsed time.
pub trait Animate {
    fn advance(&mut self, delta_secs: f64, multiplier: f32);
}

fn step_angle(angle: f32, delta_secs: f64, rate: f32) -> f32 {
    (angle + delta_secs as f32 * rate).rem_euclid(TAU)
}

/// Planet body and its cloud shell, both spinning about Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Planet {
    pub rotation: f32,
    pub cloud_rotation: f32,
}

impl Animate for Planet {
    fn advance(&mut self, delta_secs: f64, multiplier: f32) {
        let rate = PLANET_SPIN_RATE * multiplier;
        self.rotation = step_angle(self.rotation, delta_secs, rate);
        self.cloud_rotation = step_angle(self.cloud_rotation, delta_secs, rate * CLOUD_SPIN_FACTOR);
    }
}

impl Planet {
    pub fn view(&self) -> PlanetView {
        PlanetView {
            rotation: self.rotation,
            cloud_rotation: self.cloud_rotation,
        }
    }
}

/// Satellite riding a pivot at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    /// Pivot rotation about Y (radians).
    pub pivot_angle: f32,
    /// Rotation about the satellite's own Y axis (radians).
    pub spin: f32,
    /// Distance from the pivot.
    pub distance: f32,
}

impl Default for Satellite {
    fn default() -> Self {
        Self::new(SATELLITE_DISTANCE)
    }
}

impl Animate for Satellite {
    fn advance(&mut self, delta_secs: f64, multiplier: f32) {
        self.pivot_angle = step_angle(
            self.pivot_angle,
            delta_secs,
            SATELLITE_ORBIT_RATE * multiplier,
        );
        self.spin = step_angle(self.spin, delta_secs, SATELLITE_SPIN_RATE * multiplier);
    }
}

impl Satellite {
    pub fn new(distance: f32) -> Self {
        Self {
            pivot_angle: 0.0,
            spin: 0.0,
            distance,
        }
    }

    /// World position: the point `(distance, 0, 0)` rotated by the pivot.
    pub fn position(&self) -> Vec3 {
        Quat::from_rotation_y(self.pivot_angle) * Vec3::new(self.distance, 0.0, 0.0)
    }

    pub fn view(&self, show_orbit: bool) -> SatelliteView {
        SatelliteView {
            pivot_angle: self.pivot_angle,
            spin: self.spin,
            position: self.position(),
            show_orbit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_satellite_advances_by_rate() {
        let mut s = Satellite::default();
        s.advance(2.0, 1.0);
        assert_relative_eq!(s.pivot_angle, 0.3, epsilon = 1e-6);
        assert_relative_eq!(s.spin, 0.1, epsilon = 1e-6);

        s.advance(1.0, 2.0);
        assert_relative_eq!(s.pivot_angle, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_multiplier_freezes() {
        let mut s = Satellite::default();
        s.advance(0.5, 1.0);
        let before = s;
        s.advance(10.0, 0.0);
        assert_eq!(s, before);

        let mut p = Planet::default();
        p.advance(10.0, 0.0);
        assert_eq!(p, Planet::default());
    }

    #[test]
    fn test_clouds_outpace_planet() {
        let mut p = Planet::default();
        p.advance(1.0, 1.0);
        assert_relative_eq!(p.rotation, 0.1, epsilon = 1e-6);
        assert_relative_eq!(p.cloud_rotation, 0.12, epsilon = 1e-6);
    }

    #[test]
    fn test_angles_wrap() {
        let mut s = Satellite::default();
        // 0.15 rad/s for 100 s = 15 rad, more than two turns.
        s.advance(100.0, 1.0);
        assert!((0.0..TAU).contains(&s.pivot_angle));
        assert_relative_eq!(s.pivot_angle, 15.0 - 2.0 * TAU, epsilon = 1e-4);
    }

    #[test]
    fn test_satellite_position_stays_on_orbit() {
        let mut s = Satellite::default();
        assert_relative_eq!(s.position().x, SATELLITE_DISTANCE, epsilon = 1e-6);

        s.pivot_angle = std::f32::consts::FRAC_PI_2;
        let p = s.position();
        assert_relative_eq!(p.length(), SATELLITE_DISTANCE, epsilon = 1e-5);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -SATELLITE_DISTANCE, epsilon = 1e-5);
        assert_eq!(p.y, 0.0);
    }
}
