//! Serde-facing boundary types: scenario inputs supplied by the
//! presentation layer and the result series it charts.

pub mod scenario;
pub mod series;

pub use scenario::{PulseShape, RadarScenario, SeismicSettings, TargetSpec};
pub use series::{EmissionSeries, RadarSeries, SeismicSeries, SignatureResponse};
