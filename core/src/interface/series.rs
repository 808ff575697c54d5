use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-target radar histories, one entry per completed time step. Range-gated
/// steps hold NaN; JSON serialization turns those into nulls, which charting
/// frontends render as gaps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RadarSeries {
    pub positions: BTreeMap<String, Vec<[f64; 2]>>,
    pub doppler_shifts: BTreeMap<String, Vec<f64>>,
    pub snr_values: BTreeMap<String, Vec<f64>>,
    pub rssi_values: BTreeMap<String, Vec<f64>>,
}

/// Spectrometer output: the shared time axis and one normalized emission
/// curve per event, all sequences the same length.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmissionSeries {
    pub time_ms: Vec<f64>,
    pub emissions: BTreeMap<String, Vec<f64>>,
}

/// On-target and off-target velocity-response curves for one signature,
/// aligned to the engine's frequency axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub on_target: Vec<f64>,
    pub off_target: Vec<f64>,
}

/// Seismic output: the frequency axis and a response pair per signature.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeismicSeries {
    pub frequencies: Vec<f64>,
    pub responses: BTreeMap<String, SignatureResponse>,
}
