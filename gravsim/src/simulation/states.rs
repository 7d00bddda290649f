//! Core state types for the gravity simulation.
//!
//! - `Body`   a single point mass, with its display color carried alongside
//! - `System` the flat collection of bodies plus the simulated time `t`

use super::vector::NVec2;

/// Opaque RGB display color. Never read by the physics.
pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, rebuilt every step
    pub m: f64, // mass
    pub radius: f64, // radius (drawing size and force cutoff)
    pub color: Rgb, // display color
}

impl Body {
    /// Body at rest at `x`
    pub fn new(x: NVec2, m: f64, radius: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m,
            radius,
            color: WHITE,
        }
    }

    pub fn with_velocity(mut self, v: NVec2) -> Self {
        self.v = v;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }
}
