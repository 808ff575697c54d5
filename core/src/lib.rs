//! Simulation engines for the synthetic sensor demonstration platform.
//!
//! Three independent numeric models live here: radar target tracking,
//! transient spectrometer emission pulses, and seismic ground-vibration
//! response to buried signatures. Each engine follows the same
//! configure -> run -> retrieve contract and owns all of its mutable state.

pub mod engines;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use prelude::{EngineError, EngineResult};
