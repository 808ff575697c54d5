use crate::interface::{EmissionSeries, PulseShape};
use crate::math::{gaussian, linspace, StatsHelper};
use crate::prelude::{EngineError, EngineResult};
use crate::telemetry::LogManager;
use std::collections::BTreeMap;

const TIME_SPAN_MS: f64 = 100.0;
const TIME_SAMPLES: usize = 1000;

/// Produces normalized emission-intensity curves for named transient events
/// over a fixed 1000-sample [0, 100] ms time axis.
///
/// Each pulse is a Gaussian rise into a one-sided exponential fall; the raw
/// curve is renormalized so its maximum equals the event's peak amplitude,
/// with a floor clamp at zero. Generation is fully deterministic.
pub struct SpectrometerEngine {
    time_ms: Vec<f64>,
    characteristics: BTreeMap<String, PulseShape>,
    logger: LogManager,
}

impl SpectrometerEngine {
    pub fn new() -> Self {
        Self {
            time_ms: linspace(0.0, TIME_SPAN_MS, TIME_SAMPLES),
            characteristics: BTreeMap::new(),
            logger: LogManager::new(),
        }
    }

    pub fn time_axis(&self) -> &[f64] {
        &self.time_ms
    }

    /// Replaces the event catalog wholesale; there is no incremental merge.
    pub fn set_characteristics(&mut self, characteristics: BTreeMap<String, PulseShape>) {
        self.characteristics = characteristics;
    }

    /// Evaluates every event's pulse over the time axis. Fails only when a
    /// raw curve's maximum is not positive (degenerate parameters such as a
    /// non-positive peak amplitude), where normalization would divide by
    /// zero; all other odd values flow through as IEEE-754 specials.
    pub fn generate_data(&self) -> EngineResult<EmissionSeries> {
        let mut emissions = BTreeMap::new();
        for (event, shape) in &self.characteristics {
            emissions.insert(event.clone(), self.emission_curve(event, shape)?);
        }

        self.logger.record(&format!(
            "spectrometer run complete: {} events over {} samples",
            emissions.len(),
            self.time_ms.len()
        ));
        Ok(EmissionSeries {
            time_ms: self.time_ms.clone(),
            emissions,
        })
    }

    fn emission_curve(&self, event: &str, shape: &PulseShape) -> EngineResult<Vec<f64>> {
        let raw: Vec<f64> = self
            .time_ms
            .iter()
            .map(|&t| {
                if t < shape.center_time {
                    // Gaussian bump centered half a rise time before the peak.
                    shape.peak_amplitude
                        * gaussian(t, shape.center_time - shape.rise_time / 2.0, shape.rise_time)
                } else {
                    // One-sided exponential decay; exceeds the peak amplitude
                    // just past center until normalization pulls it back.
                    shape.peak_amplitude
                        * (-(t - shape.center_time - shape.fall_time / 2.0) / shape.fall_time).exp()
                }
            })
            .collect();

        let raw_max = StatsHelper::max(&raw);
        if raw_max <= 0.0 {
            return Err(EngineError::DegenerateCurve(format!(
                "event '{}' peaked at {}, cannot normalize",
                event, raw_max
            )));
        }

        Ok(raw
            .iter()
            .map(|&v| (v / raw_max * shape.peak_amplitude).max(0.0))
            .collect())
    }
}

impl Default for SpectrometerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_event(shape: PulseShape) -> BTreeMap<String, PulseShape> {
        let mut events = BTreeMap::new();
        events.insert("TNT explosion".to_string(), shape);
        events
    }

    fn demo_shape() -> PulseShape {
        PulseShape {
            center_time: 20.0,
            rise_time: 2.0,
            fall_time: 10.0,
            peak_amplitude: 80.0,
        }
    }

    #[test]
    fn normalized_curve_peaks_at_the_requested_amplitude() {
        let mut spectrometer = SpectrometerEngine::new();
        spectrometer.set_characteristics(single_event(demo_shape()));

        let series = spectrometer.generate_data().unwrap();
        let curve = &series.emissions["TNT explosion"];
        assert_eq!(curve.len(), 1000);
        let max = StatsHelper::max(curve);
        assert!((max - 80.0).abs() < 1e-9);
        assert!(curve.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn generation_is_deterministic() {
        let mut spectrometer = SpectrometerEngine::new();
        spectrometer.set_characteristics(single_event(demo_shape()));

        let first = spectrometer.generate_data().unwrap();
        let second = spectrometer.generate_data().unwrap();
        assert_eq!(
            first.emissions["TNT explosion"],
            second.emissions["TNT explosion"]
        );
    }

    #[test]
    fn time_axis_spans_zero_to_one_hundred_ms() {
        let spectrometer = SpectrometerEngine::new();
        let axis = spectrometer.time_axis();
        assert_eq!(axis.len(), 1000);
        assert_eq!(axis[0], 0.0);
        assert!((axis[999] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn set_characteristics_replaces_the_whole_catalog() {
        let mut spectrometer = SpectrometerEngine::new();
        spectrometer.set_characteristics(single_event(demo_shape()));

        let mut replacement = BTreeMap::new();
        replacement.insert("RPG launch".to_string(), demo_shape());
        spectrometer.set_characteristics(replacement);

        let series = spectrometer.generate_data().unwrap();
        assert!(series.emissions.contains_key("RPG launch"));
        assert!(!series.emissions.contains_key("TNT explosion"));
    }

    #[test]
    fn non_positive_peak_amplitude_is_a_degenerate_curve() {
        let mut spectrometer = SpectrometerEngine::new();
        spectrometer.set_characteristics(single_event(PulseShape {
            center_time: 20.0,
            rise_time: 2.0,
            fall_time: 10.0,
            peak_amplitude: 0.0,
        }));

        assert!(matches!(
            spectrometer.generate_data(),
            Err(EngineError::DegenerateCurve(_))
        ));
    }
}
