use crate::interface::RadarSeries;
use crate::prelude::{EngineError, EngineResult};
use crate::telemetry::LogManager;
use std::collections::BTreeMap;

const SPEED_OF_LIGHT: f64 = 3.0e8;
const NOISE_FLOOR: f64 = 1e-3;

/// Target name whose vertical velocity is scripted into a loop each step.
const DRONE_TARGET: &str = "drone";

/// A tracked point target. Mutated in place by the engine each time step;
/// created once at setup and never destroyed during a run.
#[derive(Debug, Clone)]
struct Target {
    position: [f64; 2],
    velocity: [f64; 2],
    rcs: f64,
}

/// Tracks named point targets against a fixed radar origin and accumulates
/// per-step Doppler shift, SNR, and RSSI histories for each.
///
/// NaN and infinity are valid domain outputs here: a range-gated step records
/// NaN across the board, and a target sitting exactly on the origin yields
/// infinite signal strength. Neither is an error.
pub struct RadarEngine {
    origin: [f64; 2],
    range_m: f64,
    carrier_hz: f64,
    targets: BTreeMap<String, Target>,
    history: RadarSeries,
    logger: LogManager,
}

impl RadarEngine {
    /// `frequency_ghz` is the carrier in GHz, stored internally in Hz.
    pub fn new(origin: [f64; 2], range_m: f64, frequency_ghz: f64) -> Self {
        Self {
            origin,
            range_m,
            carrier_hz: frequency_ghz * 1e9,
            targets: BTreeMap::new(),
            history: RadarSeries::default(),
            logger: LogManager::new(),
        }
    }

    /// Registers a target under `name`, replacing any prior target of the
    /// same name and resetting its four histories to empty.
    pub fn add_target(&mut self, name: &str, position: [f64; 2], velocity: [f64; 2], rcs: f64) {
        self.targets.insert(
            name.to_string(),
            Target {
                position,
                velocity,
                rcs,
            },
        );
        self.history.positions.insert(name.to_string(), Vec::new());
        self.history
            .doppler_shifts
            .insert(name.to_string(), Vec::new());
        self.history.snr_values.insert(name.to_string(), Vec::new());
        self.history
            .rssi_values
            .insert(name.to_string(), Vec::new());
    }

    /// Advances every registered target for `time_steps` Euler iterations of
    /// length `dt` seconds, appending one history entry per target per step.
    ///
    /// Steps where a target's true distance exceeds the radar range record
    /// NaN position and metrics, but the underlying kinematics keep evolving.
    pub fn run_simulation(
        &mut self,
        time_steps: usize,
        dt: f64,
        loop_frequency: f64,
    ) -> EngineResult<()> {
        if time_steps == 0 {
            return Err(EngineError::InvalidInput(
                "time_steps must be positive".into(),
            ));
        }
        if dt <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "dt must be positive, got {}",
                dt
            )));
        }

        for step in 0..time_steps {
            // Scripted flight path, not physics: the drone loops vertically.
            if let Some(drone) = self.targets.get_mut(DRONE_TARGET) {
                drone.velocity[1] = 10.0 * (loop_frequency * step as f64).sin();
            }

            for (name, target) in self.targets.iter_mut() {
                target.position[0] += target.velocity[0] * dt;
                target.position[1] += target.velocity[1] * dt;

                let dx = target.position[0] - self.origin[0];
                let dy = target.position[1] - self.origin[1];
                let distance = (dx * dx + dy * dy).sqrt();

                let (doppler_shift, signal_strength) = if distance == 0.0 {
                    (0.0, f64::INFINITY)
                } else {
                    let radial_velocity =
                        (target.velocity[0] * dx + target.velocity[1] * dy) / distance;
                    (
                        self.carrier_hz * radial_velocity / SPEED_OF_LIGHT,
                        target.rcs / (distance * distance),
                    )
                };

                let snr = signal_strength / NOISE_FLOOR;
                let rssi = if distance == 0.0 {
                    f64::INFINITY
                } else {
                    target.rcs * signal_strength * self.carrier_hz / (distance * distance)
                };
                let rssi_dbm = if rssi > 0.0 {
                    10.0 * (rssi / 1e-3).log10()
                } else {
                    f64::NEG_INFINITY
                };

                let detected = distance <= self.range_m;
                self.history
                    .positions
                    .entry(name.clone())
                    .or_default()
                    .push(if detected {
                        target.position
                    } else {
                        [f64::NAN, f64::NAN]
                    });
                self.history
                    .doppler_shifts
                    .entry(name.clone())
                    .or_default()
                    .push(if detected { doppler_shift } else { f64::NAN });
                self.history
                    .snr_values
                    .entry(name.clone())
                    .or_default()
                    .push(if detected { snr } else { f64::NAN });
                self.history
                    .rssi_values
                    .entry(name.clone())
                    .or_default()
                    .push(if detected { rssi_dbm } else { f64::NAN });
            }
        }

        self.logger.record(&format!(
            "radar run complete: {} steps, {} targets",
            time_steps,
            self.targets.len()
        ));
        Ok(())
    }

    /// Snapshot of the accumulated histories. Before any run, every
    /// registered target maps to empty sequences.
    pub fn simulation_data(&self) -> RadarSeries {
        self.history.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RadarEngine {
        RadarEngine::new([0.0, 0.0], 100.0, 10.0)
    }

    #[test]
    fn stationary_target_has_zero_doppler_and_constant_rssi() {
        let mut radar = engine();
        radar.add_target("tower", [30.0, 40.0], [0.0, 0.0], 1.5);
        radar.run_simulation(20, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        let doppler = &data.doppler_shifts["tower"];
        let rssi = &data.rssi_values["tower"];
        assert!(doppler.iter().all(|&d| d == 0.0));
        assert!(rssi.iter().all(|&r| (r - rssi[0]).abs() < 1e-9));
    }

    #[test]
    fn out_of_range_target_records_nan_everywhere() {
        let mut radar = engine();
        radar.add_target("distant", [500.0, 0.0], [0.0, 0.0], 1.0);
        radar.run_simulation(5, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        assert!(data.positions["distant"]
            .iter()
            .all(|p| p[0].is_nan() && p[1].is_nan()));
        assert!(data.doppler_shifts["distant"].iter().all(|v| v.is_nan()));
        assert!(data.snr_values["distant"].iter().all(|v| v.is_nan()));
        assert!(data.rssi_values["distant"].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn histories_grow_one_entry_per_step_for_every_target() {
        let mut radar = engine();
        radar.add_target("missile", [50.0, 80.0], [-2.0, -6.0], 1.0);
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);
        radar.run_simulation(15, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        for name in ["missile", "plane"] {
            assert_eq!(data.positions[name].len(), 15);
            assert_eq!(data.doppler_shifts[name].len(), 15);
            assert_eq!(data.snr_values[name].len(), 15);
            assert_eq!(data.rssi_values[name].len(), 15);
        }
    }

    #[test]
    fn drone_velocity_is_overwritten_by_the_loop_script() {
        let mut radar = engine();
        // The registered vertical velocity is ignored once the run starts.
        radar.add_target("drone", [20.0, -50.0], [-5.0, 99.0], 0.5);
        radar.run_simulation(2, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        let track = &data.positions["drone"];
        // Step 0: vy = 10*sin(0) = 0, step 1: vy = 10*sin(0.1).
        assert!((track[0][1] - (-50.0)).abs() < 1e-9);
        let expected_y = -50.0 + 10.0 * (0.1f64).sin();
        assert!((track[1][1] - expected_y).abs() < 1e-9);
    }

    #[test]
    fn plane_track_matches_closed_form_positions() {
        let mut radar = engine();
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);
        radar.run_simulation(5, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        let xs: Vec<f64> = data.positions["plane"].iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![65.0, 60.0, 55.0, 50.0, 45.0]);
        // Approaching head-on at 5 m/s -> doppler = 1e10 * -5 / 3e8.
        let expected_doppler = 1e10 * -5.0 / 3.0e8;
        for &d in &data.doppler_shifts["plane"] {
            assert!((d - expected_doppler).abs() < 1e-6);
        }
    }

    #[test]
    fn target_at_origin_yields_infinite_signal() {
        let mut radar = engine();
        radar.add_target("incoming", [5.0, 0.0], [-5.0, 0.0], 1.0);
        radar.run_simulation(1, 1.0, 0.1).unwrap();

        let data = radar.simulation_data();
        assert_eq!(data.positions["incoming"][0], [0.0, 0.0]);
        assert_eq!(data.doppler_shifts["incoming"][0], 0.0);
        assert!(data.snr_values["incoming"][0].is_infinite());
        assert!(data.rssi_values["incoming"][0].is_infinite());
    }

    #[test]
    fn re_adding_a_target_resets_its_histories() {
        let mut radar = engine();
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);
        radar.run_simulation(3, 1.0, 0.1).unwrap();
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);

        let data = radar.simulation_data();
        assert!(data.positions["plane"].is_empty());
    }

    #[test]
    fn zero_steps_or_nonpositive_dt_is_rejected() {
        let mut radar = engine();
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);
        assert!(matches!(
            radar.run_simulation(0, 1.0, 0.1),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            radar.run_simulation(5, 0.0, 0.1),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn data_before_any_run_is_empty() {
        let mut radar = engine();
        radar.add_target("plane", [70.0, 0.0], [-5.0, 0.0], 2.0);
        let data = radar.simulation_data();
        assert!(data.positions["plane"].is_empty());
        assert!(data.doppler_shifts["plane"].is_empty());
    }
}
