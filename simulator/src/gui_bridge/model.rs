use sensorcore::interface::{EmissionSeries, RadarSeries, SeismicSeries, SeismicSettings};
use serde::{Deserialize, Serialize};

/// Current state published to the charting frontend. Each section is filled
/// in by the most recent run of its engine; sections start empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub radar: Option<RadarSeries>,
    pub emissions: Option<EmissionSeries>,
    pub seismic: Option<SeismicSeries>,
}

/// Request body for a seismic run over the bridge: the engine settings plus
/// an optional seed for reproducible noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeismicRequest {
    #[serde(flatten)]
    pub settings: SeismicSettings,
    pub seed: Option<u64>,
}
