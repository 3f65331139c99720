use serde::{Deserialize, Serialize};

/// 8-bit RGB base color of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Per-channel arithmetic mean of two colors (merge blending)
    pub fn mix(a: Rgb, b: Rgb) -> Rgb {
        Rgb(
            ((a.0 as u16 + b.0 as u16) / 2) as u8,
            ((a.1 as u16 + b.1 as u16) / 2) as u8,
            ((a.2 as u16 + b.2 as u16) / 2) as u8,
        )
    }

    /// Scale all channels by `factor` (expected in [0, 1])
    pub fn darken(self, factor: f32) -> Rgb {
        Rgb(
            (self.0 as f32 * factor) as u8,
            (self.1 as f32 * factor) as u8,
            (self.2 as f32 * factor) as u8,
        )
    }
}

/// The world rectangle [0, width] x [0, height] that bouncing bodies stay inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// One run-tracker sample: simulated seconds and the live body count at that mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSample {
    pub t: f64,
    pub bodies: usize,
}
