use serde::{Deserialize, Serialize};

/// A named radar target as supplied by the caller. Positions are meters,
/// velocities m/s, RCS in square meters (expected positive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    pub name: String,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub rcs: f64,
}

impl TargetSpec {
    pub fn new(name: &str, position: [f64; 2], velocity: [f64; 2], rcs: f64) -> Self {
        Self {
            name: name.to_string(),
            position,
            velocity,
            rcs,
        }
    }
}

/// Full radar run description: engine construction parameters plus the
/// target set and stepping controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarScenario {
    pub origin: [f64; 2],
    /// Maximum detection range in meters.
    pub range_m: f64,
    /// Carrier frequency in GHz; the engine stores it in Hz.
    pub frequency_ghz: f64,
    pub time_steps: usize,
    pub dt: f64,
    /// Angular rate of the scripted drone loop, radians per step.
    pub loop_frequency: f64,
    pub targets: Vec<TargetSpec>,
}

/// Pulse-shape parameters for one spectrometer emission event. Times are
/// milliseconds on the shared [0, 100] ms axis; rise and fall times must be
/// positive for a meaningful curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PulseShape {
    pub center_time: f64,
    pub rise_time: f64,
    pub fall_time: f64,
    pub peak_amplitude: f64,
}

/// Soil attenuation and noise controls for one seismic run. Soil impacts
/// are expected in [0, 1] but are not validated; out-of-range values scale
/// the response linearly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeismicSettings {
    pub soil_impact_on: f64,
    pub noise_level_on: f64,
    pub soil_impact_off: f64,
    pub noise_level_off: f64,
}
