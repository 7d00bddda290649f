//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constant, sub-stepping and integration options
//! - [`ViewConfig`]       – drawing options for the viewer
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario, a planet on a circular orbit around a star:
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11                  # gravitational constant
//!   sub_steps: 100                 # integrator passes per frame
//!   time_scale: 75.0               # simulated seconds per real second
//!   update_order: "snapshot"       # or "sequential"
//!   orbit_convention: "reference"  # or "tangential"
//!
//! view:
//!   draw_scale: 2.0
//!   view_scale: 5.0e5
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     m: 1.9885e15
//!     radius: 5000.0
//!     color: [ 255, 255, 0 ]
//!   - x: [ 22000.0, 0.0 ]
//!     m: 1.0e10
//!     radius: 1000.0
//!     orbits: [ 0 ]                # velocity computed around body 0
//! ```
//!
//! Every field of `parameters` and the whole `view` section may be left out.
//! A body's `v` is only used when its `orbits` list is empty.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::params::{G, SUB_STEPS, TIME_SCALE};
use crate::simulation::states::{Rgb, WHITE};

/// How body updates are sequenced inside one integrator step
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    #[serde(rename = "snapshot")] // all accelerations from one snapshot of positions, then all updates
    #[default]
    Snapshot,

    #[serde(rename = "sequential")] // body i fully updated before body i + 1 reads positions
    Sequential,
}

/// Axis convention used for circular orbit velocities
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbitConvention {
    #[serde(rename = "reference")] // (sin, cos) * speed, perpendicular only on the coordinate axes
    #[default]
    Reference,

    #[serde(rename = "tangential")] // (-sin, cos) * speed, counter-clockwise tangent everywhere
    Tangential,
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_sub_steps")]
    pub sub_steps: u32, // integrator passes per external tick
    #[serde(default = "default_time_scale")]
    pub time_scale: f64, // multiplier applied to the elapsed frame time
    #[serde(default)]
    pub update_order: UpdateOrder,
    #[serde(default)]
    pub orbit_convention: OrbitConvention,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G,
            sub_steps: SUB_STEPS,
            time_scale: TIME_SCALE,
            update_order: UpdateOrder::default(),
            orbit_convention: OrbitConvention::default(),
        }
    }
}

/// Drawing options, only read by the viewer
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_draw_scale")]
    pub draw_scale: f64, // drawn radius = radius * draw_scale
    #[serde(default = "default_view_scale")]
    pub view_scale: f64, // world units per view unit of the free camera
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            draw_scale: default_draw_scale(),
            view_scale: default_view_scale(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position in simulation units
    #[serde(default)]
    pub v: Vec<f64>, // Initial velocity, empty means at rest
    pub m: f64, // Mass of the body
    pub radius: f64, // Radius, used for the force cutoff and for drawing
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub orbits: Vec<usize>, // Indices of primaries; overrides `v` with the summed circular orbit velocities
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

fn default_g() -> f64 {
    G
}

fn default_sub_steps() -> u32 {
    SUB_STEPS
}

fn default_time_scale() -> f64 {
    TIME_SCALE
}

fn default_draw_scale() -> f64 {
    2.0
}

fn default_view_scale() -> f64 {
    5.0e5
}

fn default_color() -> Rgb {
    WHITE
}
