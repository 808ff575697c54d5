use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sensorcore::engines::{RadarEngine, SeismicEngine, SpectrometerEngine};
use sensorcore::interface::{
    EmissionSeries, PulseShape, RadarScenario, RadarSeries, SeismicSeries, SeismicSettings,
};
use sensorcore::math::linspace;
use std::collections::BTreeMap;

/// Results of one full pass over all three engines.
pub struct SimulationReport {
    pub radar: RadarSeries,
    pub emissions: EmissionSeries,
    pub seismic: SeismicSeries,
}

#[derive(Clone)]
pub struct Runner {
    config: ScenarioConfig,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// Runs every engine once from the loaded scenario. The engines are
    /// independent; any of them can also be run alone via the bridge.
    pub fn execute(&self) -> anyhow::Result<SimulationReport> {
        let radar = self
            .run_radar(&self.config.radar)
            .context("running radar simulation")?;
        let emissions = self
            .run_spectrometer(&self.config.spectrometer)
            .context("running spectrometer simulation")?;
        let seismic = self
            .run_seismic(&self.config.seismic.settings, self.config.seismic.seed)
            .context("running seismic simulation")?;

        log::info!(
            "scenario executed: {} targets, {} events, {} signatures",
            radar.positions.len(),
            emissions.emissions.len(),
            seismic.responses.len()
        );
        Ok(SimulationReport {
            radar,
            emissions,
            seismic,
        })
    }

    pub fn run_radar(&self, scenario: &RadarScenario) -> anyhow::Result<RadarSeries> {
        let mut radar = RadarEngine::new(scenario.origin, scenario.range_m, scenario.frequency_ghz);
        for target in &scenario.targets {
            radar.add_target(&target.name, target.position, target.velocity, target.rcs);
        }
        radar
            .run_simulation(scenario.time_steps, scenario.dt, scenario.loop_frequency)
            .context("advancing radar simulation")?;
        Ok(radar.simulation_data())
    }

    pub fn run_spectrometer(
        &self,
        events: &BTreeMap<String, PulseShape>,
    ) -> anyhow::Result<EmissionSeries> {
        let mut spectrometer = SpectrometerEngine::new();
        spectrometer.set_characteristics(events.clone());
        spectrometer
            .generate_data()
            .context("generating emission curves")
    }

    pub fn run_seismic(
        &self,
        settings: &SeismicSettings,
        seed: Option<u64>,
    ) -> anyhow::Result<SeismicSeries> {
        let seismic = SeismicEngine::new(linspace(
            self.config.seismic.frequency_start_hz,
            self.config.seismic.frequency_stop_hz,
            self.config.seismic.frequency_samples,
        ));
        let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
        seismic
            .generate_data(settings, &mut rng)
            .context("generating seismic responses")
    }
}
