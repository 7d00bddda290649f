//! Build a fully-initialized simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Scenario`]:
//! - validated runtime `Parameters`
//! - bodies at t = 0, with circular orbit velocities filled in for every
//!   body that names primaries
//! - the `Simulation` driver owning them, plus the viewer settings

use crate::configuration::config::{BodyConfig, ScenarioConfig, ViewConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::driver::Simulation;
use crate::simulation::orbit::superposed_orbit_velocity;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;
use crate::simulation::vector::NVec2;

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub view: ViewConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let parameters = Parameters::from_config(&cfg.parameters)?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let mut bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<SimResult<Vec<Body>>>()?;

        // Orbit velocities only read the initial positions and masses, so the
        // order in which bodies are initialized does not matter
        let initial = bodies.clone();
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if bc.orbits.is_empty() {
                continue;
            }

            let mut primaries = Vec::with_capacity(bc.orbits.len());
            for &p in &bc.orbits {
                let primary = initial
                    .get(p)
                    .filter(|_| p != i)
                    .ok_or(SimError::InvalidPrimary { body: i, primary: p })?;
                if primary.x == initial[i].x {
                    return Err(SimError::CoincidentPrimary { body: i, primary: p });
                }
                primaries.push(primary);
            }

            bodies[i].v = superposed_orbit_velocity(
                &initial[i],
                primaries,
                parameters.G,
                parameters.orbit_convention,
            );
        }

        Ok(Self {
            simulation: Simulation::new(parameters, bodies),
            view: cfg.view,
        })
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> SimResult<Body> {
    let x = vec2(i, "x", &bc.x)?;
    let v = if bc.v.is_empty() {
        NVec2::zeros()
    } else {
        vec2(i, "v", &bc.v)?
    };

    if !bc.m.is_finite() || bc.m < 0.0 {
        return Err(SimError::InvalidBody {
            body: i,
            reason: format!("mass must be finite and non-negative, got {}", bc.m),
        });
    }
    if !bc.radius.is_finite() || bc.radius < 0.0 {
        return Err(SimError::InvalidBody {
            body: i,
            reason: format!("radius must be finite and non-negative, got {}", bc.radius),
        });
    }

    Ok(Body::new(x, bc.m, bc.radius)
        .with_velocity(v)
        .with_color(bc.color))
}

fn vec2(body: usize, field: &'static str, xs: &[f64]) -> SimResult<NVec2> {
    match *xs {
        [x, y] if x.is_finite() && y.is_finite() => Ok(NVec2::new(x, y)),
        [_, _] => Err(SimError::InvalidBody {
            body,
            reason: format!("`{field}` must be finite, got {xs:?}"),
        }),
        _ => Err(SimError::InvalidVector {
            body,
            field,
            len: xs.len(),
        }),
    }
}
