pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::vector::{NVec2, VecExt};
pub use simulation::states::{Body, System, Rgb};
pub use simulation::forces::{Acceleration, NewtonianGravity};
pub use simulation::integrator::{step, semi_implicit_euler, semi_implicit_euler_sequential};
pub use simulation::orbit::{orbit_velocity, orbit_velocity_with, superposed_orbit_velocity};
pub use simulation::params::{Parameters, G};
pub use simulation::driver::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig, UpdateOrder, OrbitConvention};

pub use visualization::{viewer2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_step;
