use crate::generator::presets;
use anyhow::Context;
use sensorcore::interface::{PulseShape, RadarScenario, SeismicSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Frequency axis and run controls for the seismic engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SeismicConfig {
    pub settings: SeismicSettings,
    pub frequency_start_hz: f64,
    pub frequency_stop_hz: f64,
    pub frequency_samples: usize,
    /// Seed for the noise source; a fresh random seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for SeismicConfig {
    fn default() -> Self {
        Self {
            settings: presets::demo_seismic_settings(),
            frequency_start_hz: 50.0,
            frequency_stop_hz: 1500.0,
            frequency_samples: 1451,
            seed: None,
        }
    }
}

/// One file describing a full run of all three engines. Any omitted section
/// falls back to the demo scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub radar: RadarScenario,
    pub spectrometer: BTreeMap<String, PulseShape>,
    pub seismic: SeismicConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            radar: presets::demo_radar_scenario(),
            spectrometer: presets::demo_event_characteristics(),
            seismic: SeismicConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }
}
