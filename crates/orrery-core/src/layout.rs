//! Static scene layout: camera, lights, fog and body dimensions.
//!
//! None of this changes per frame; the renderer reads it once.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub camera: CameraLayout,
    pub lights: Vec<LightLayout>,
    pub fog: FogLayout,
    pub bodies: BodyLayout,
}

/// Perspective camera orbiting the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraLayout {
    pub position: Vec3,
    pub fov_deg: f32,
    /// Closest the orbit controls may zoom in.
    pub min_distance: f32,
    /// Farthest the orbit controls may zoom out.
    pub max_distance: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LightLayout {
    Ambient { intensity: f32 },
    Directional {
        position: Vec3,
        intensity: f32,
        casts_shadow: bool,
    },
    Point {
        position: Vec3,
        intensity: f32,
        color: Rgb,
    },
}

/// Linear fog between `near` and `far`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogLayout {
    pub color: Rgb,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLayout {
    pub planet_radius: f32,
    pub cloud_radius: f32,
    pub atmosphere_radius: f32,
    pub inner_glow_radius: f32,
    pub satellite_radius: f32,
    pub satellite_distance: f32,
    pub orbit_ring_half_width: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            camera: CameraLayout {
                position: Vec3::new(0.0, 4.0, 15.0),
                fov_deg: 45.0,
                min_distance: 4.0,
                max_distance: 35.0,
            },
            lights: vec![
                LightLayout::Ambient { intensity: 0.08 },
                LightLayout::Directional {
                    position: Vec3::new(30.0, 15.0, 30.0),
                    intensity: 4.0,
                    casts_shadow: true,
                },
                LightLayout::Point {
                    position: Vec3::new(-20.0, -10.0, -20.0),
                    intensity: 0.5,
                    color: Rgb::from_hex(0x001133),
                },
            ],
            fog: FogLayout {
                color: Rgb::from_hex(0x000000),
                near: 30.0,
                far: VISIBLE_RADIUS,
            },
            bodies: BodyLayout {
                planet_radius: PLANET_RADIUS,
                cloud_radius: CLOUD_RADIUS,
                atmosphere_radius: ATMOSPHERE_RADIUS,
                inner_glow_radius: INNER_GLOW_RADIUS,
                satellite_radius: SATELLITE_RADIUS,
                satellite_distance: SATELLITE_DISTANCE,
                orbit_ring_half_width: ORBIT_RING_HALF_WIDTH,
            },
        }
    }
}
