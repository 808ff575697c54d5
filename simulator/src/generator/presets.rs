use sensorcore::interface::{PulseShape, RadarScenario, SeismicSettings, TargetSpec};
use std::collections::BTreeMap;

/// Demo radar scenario: three named targets approaching a radar at the
/// origin, including the scripted looping drone.
pub fn demo_radar_scenario() -> RadarScenario {
    RadarScenario {
        origin: [0.0, 0.0],
        range_m: 100.0,
        frequency_ghz: 10.0,
        time_steps: 50,
        dt: 1.0,
        loop_frequency: 0.1,
        targets: vec![
            TargetSpec::new("missile", [50.0, 80.0], [-2.0, -6.0], 1.0),
            TargetSpec::new("drone", [20.0, -50.0], [-5.0, 0.0], 0.5),
            TargetSpec::new("plane", [70.0, 0.0], [-5.0, 0.0], 2.0),
        ],
    }
}

/// Demo spectrometer catalog: four muzzle-flash/explosion event types with
/// staggered pulse parameters so the curves separate visually.
pub fn demo_event_characteristics() -> BTreeMap<String, PulseShape> {
    BTreeMap::from([
        (
            "APFSDS launch".to_string(),
            PulseShape {
                center_time: 10.0,
                rise_time: 1.0,
                fall_time: 5.0,
                peak_amplitude: 60.0,
            },
        ),
        (
            "HE projectile launch".to_string(),
            PulseShape {
                center_time: 20.0,
                rise_time: 2.0,
                fall_time: 10.0,
                peak_amplitude: 80.0,
            },
        ),
        (
            "RPG launch".to_string(),
            PulseShape {
                center_time: 30.0,
                rise_time: 3.0,
                fall_time: 8.0,
                peak_amplitude: 70.0,
            },
        ),
        (
            "TNT explosion".to_string(),
            PulseShape {
                center_time: 40.0,
                rise_time: 5.0,
                fall_time: 25.0,
                peak_amplitude: 100.0,
            },
        ),
    ])
}

/// Demo seismic controls: light attenuation over the mine, heavier away
/// from it, with a little measurement noise on both branches.
pub fn demo_seismic_settings() -> SeismicSettings {
    SeismicSettings {
        soil_impact_on: 0.1,
        noise_level_on: 0.001,
        soil_impact_off: 0.5,
        noise_level_off: 0.002,
    }
}
