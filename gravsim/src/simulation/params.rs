//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings the driver is constructed with:
//! - gravitational constant `G`,
//! - sub-steps per external tick and the time scale applied to the tick,
//! - how bodies are sequenced inside a step and which orbit convention to use

use crate::configuration::config::{OrbitConvention, ParametersConfig, UpdateOrder};
use crate::error::{SimError, SimResult};

/// Gravitational constant, SI units
pub const G: f64 = 6.67430e-11;

/// Default integrator passes per external tick
pub const SUB_STEPS: u32 = 100;

/// Default multiplier applied to the elapsed frame time
pub const TIME_SCALE: f64 = 75.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub sub_steps: u32, // integrator passes per tick
    pub time_scale: f64, // dt = elapsed * time_scale
    pub update_order: UpdateOrder,
    pub orbit_convention: OrbitConvention,
}

impl Default for Parameters {
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

impl Parameters {
    /// Validate a `ParametersConfig` and map it to runtime parameters
    pub fn from_config(cfg: &ParametersConfig) -> SimResult<Self> {
        if !cfg.G.is_finite() || cfg.G < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "G",
                reason: format!("must be finite and non-negative, got {}", cfg.G),
            });
        }
        if cfg.sub_steps == 0 {
            return Err(SimError::InvalidParameter {
                name: "sub_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !cfg.time_scale.is_finite() || cfg.time_scale < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "time_scale",
                reason: format!("must be finite and non-negative, got {}", cfg.time_scale),
            });
        }

        Ok(Self {
            G: cfg.G,
            sub_steps: cfg.sub_steps,
            time_scale: cfg.time_scale,
            update_order: cfg.update_order,
            orbit_convention: cfg.orbit_convention,
        })
    }
}
