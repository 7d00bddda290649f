pub mod vector;
pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod orbit;
pub mod diagnostics;
pub mod driver;
pub mod scenario;
