pub use crate::engines::{RadarEngine, SeismicEngine, SpectrometerEngine};
pub use crate::interface::{
    EmissionSeries, PulseShape, RadarScenario, RadarSeries, SeismicSeries, SeismicSettings,
    SignatureResponse, TargetSpec,
};

/// Common error type for engine execution.
///
/// Degenerate numeric outcomes (infinite signal strength at zero range,
/// NaN-gated samples) are ordinary outputs, not errors; only conditions a
/// caller can actually act on surface here.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
