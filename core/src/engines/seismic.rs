use crate::interface::{SeismicSeries, SeismicSettings, SignatureResponse};
use crate::math::{gaussian, StatsHelper};
use crate::prelude::{EngineError, EngineResult};
use crate::telemetry::LogManager;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::BTreeMap;

/// Amplitude factor applied to every resonance peak for the off-target
/// branch before soil-impact scaling.
const OFF_TARGET_SCALE: f64 = 0.1;

/// One Gaussian-shaped resonance peak of a buried-signature response.
#[derive(Debug, Clone, Copy)]
pub struct ResonancePeak {
    pub frequency_hz: f64,
    pub amplitude: f64,
    pub width_hz: f64,
}

impl ResonancePeak {
    const fn new(frequency_hz: f64, amplitude: f64, width_hz: f64) -> Self {
        Self {
            frequency_hz,
            amplitude,
            width_hz,
        }
    }
}

/// Computes noisy on/off-target ground-velocity response spectra for a fixed
/// catalog of buried-mine resonance signatures.
///
/// The catalog is fixed at construction; callers only steer soil attenuation
/// and noise levels per run. The random source is injected so tests can pin
/// a seed.
pub struct SeismicEngine {
    frequencies: Vec<f64>,
    signatures: BTreeMap<String, Vec<ResonancePeak>>,
    logger: LogManager,
}

impl SeismicEngine {
    pub fn new(frequencies: Vec<f64>) -> Self {
        Self {
            frequencies,
            signatures: signature_catalog(),
            logger: LogManager::new(),
        }
    }

    pub fn frequency_axis(&self) -> &[f64] {
        &self.frequencies
    }

    /// Produces one (on-target, off-target) response pair per signature.
    ///
    /// Soil impacts scale peak amplitudes by `1 - soil_impact` and are not
    /// range-checked; values outside [0, 1] simply scale linearly. A negative
    /// noise level is the only rejected input.
    pub fn generate_data<R: Rng>(
        &self,
        settings: &SeismicSettings,
        rng: &mut R,
    ) -> EngineResult<SeismicSeries> {
        let mut responses = BTreeMap::new();
        for (name, peaks) in &self.signatures {
            let mut on_target = self.response(peaks, settings.soil_impact_on, 1.0);
            let mut off_target = self.response(peaks, settings.soil_impact_off, OFF_TARGET_SCALE);
            add_noise(&mut on_target, settings.noise_level_on, rng)?;
            add_noise(&mut off_target, settings.noise_level_off, rng)?;

            self.logger.record(&format!(
                "seismic response for {}: on RMS {:.6}, off RMS {:.6}",
                name,
                StatsHelper::rms(&on_target),
                StatsHelper::rms(&off_target)
            ));
            responses.insert(
                name.clone(),
                SignatureResponse {
                    on_target,
                    off_target,
                },
            );
        }

        Ok(SeismicSeries {
            frequencies: self.frequencies.clone(),
            responses,
        })
    }

    fn response(&self, peaks: &[ResonancePeak], soil_impact: f64, scale: f64) -> Vec<f64> {
        let mut response = vec![0.0; self.frequencies.len()];
        for peak in peaks {
            let amplitude = peak.amplitude * scale * (1.0 - soil_impact);
            for (value, &frequency) in response.iter_mut().zip(&self.frequencies) {
                *value += amplitude * gaussian(frequency, peak.frequency_hz, peak.width_hz);
            }
        }
        response
    }
}

fn add_noise<R: Rng>(signal: &mut [f64], noise_level: f64, rng: &mut R) -> EngineResult<()> {
    let normal = Normal::new(0.0, noise_level).map_err(|err| {
        EngineError::InvalidInput(format!("noise level {}: {}", noise_level, err))
    })?;
    for value in signal.iter_mut() {
        *value += normal.sample(rng);
    }
    Ok(())
}

fn signature_catalog() -> BTreeMap<String, Vec<ResonancePeak>> {
    BTreeMap::from([
        (
            "M19".to_string(),
            vec![
                ResonancePeak::new(300.0, 0.02, 100.0),
                ResonancePeak::new(450.0, 0.01, 150.0),
            ],
        ),
        (
            "VS2.2".to_string(),
            vec![ResonancePeak::new(250.0, 0.015, 120.0)],
        ),
        (
            "VS50".to_string(),
            vec![
                ResonancePeak::new(1000.0, 0.03, 50.0),
                ResonancePeak::new(1250.0, 0.025, 80.0),
            ],
        ),
        (
            "TS50".to_string(),
            vec![
                ResonancePeak::new(850.0, 0.035, 90.0),
                ResonancePeak::new(950.0, 0.02, 100.0),
            ],
        ),
    ])
}
