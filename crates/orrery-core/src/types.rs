//! Fundamental value types shared by the engine and the renderer boundary.

use serde::{Deserialize, Serialize};

/// Linear RGB colour with components in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Packed `0xRRGGBB` representation (rounded to the nearest byte).
    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

/// Frame counter and accumulated animation time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameCount {
    /// Number of completed ticks.
    pub frame: u64,
    /// Sum of all elapsed deltas fed to the scene (seconds).
    pub elapsed_secs: f64,
}

impl FrameCount {
    /// Record one completed tick that consumed `delta_secs`.
    pub fn advance(&mut self, delta_secs: f64) {
        self.frame += 1;
        self.elapsed_secs += delta_secs;
    }
}
