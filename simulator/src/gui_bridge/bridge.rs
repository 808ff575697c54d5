use crate::gui_bridge::model::{SeismicRequest, VisualizationModel};
use crate::workflow::runner::Runner;
use anyhow::Result;
use sensorcore::interface::{PulseShape, RadarScenario};
use sensorcore::telemetry::MetricsRecorder;
use serde_json::json;
use std::{
    collections::BTreeMap,
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge hosting the HTTP endpoints the charting frontend talks to: one
/// GET for the current series, one POST per engine to trigger a run.
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
    metrics: Arc<MetricsRecorder>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let metrics = Arc::new(MetricsRecorder::new());

        let state_for_filter = state.clone();
        let metrics_for_filter = metrics.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let metrics_filter = warp::any().map(move || metrics_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let payload_route = warp::path("payload")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<VisualizationModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let status_route = warp::path("status")
            .and(warp::get())
            .and(metrics_filter.clone())
            .map(|metrics: Arc<MetricsRecorder>| {
                let (runs, errors) = metrics.snapshot();
                warp::reply::json(&json!({"runs": runs, "errors": errors}))
            });

        let radar_route = warp::path("radar")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(metrics_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |scenario: RadarScenario,
                 state: Arc<RwLock<VisualizationModel>>,
                 metrics: Arc<MetricsRecorder>,
                 runner: Arc<Runner>| async move {
                    match runner.run_radar(&scenario) {
                        Ok(series) => {
                            let targets = series.positions.len();
                            state.write().unwrap().radar = Some(series);
                            metrics.record_run();
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({"status": "ok", "targets": targets})),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("radar run error: {}", err);
                            metrics.record_error();
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let spectrometer_route = warp::path("spectrometer")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(metrics_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |events: BTreeMap<String, PulseShape>,
                 state: Arc<RwLock<VisualizationModel>>,
                 metrics: Arc<MetricsRecorder>,
                 runner: Arc<Runner>| async move {
                    match runner.run_spectrometer(&events) {
                        Ok(series) => {
                            let events = series.emissions.len();
                            state.write().unwrap().emissions = Some(series);
                            metrics.record_run();
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({"status": "ok", "events": events})),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("spectrometer run error: {}", err);
                            metrics.record_error();
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let seismic_route = warp::path("seismic")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(metrics_filter)
            .and(runner_filter)
            .and_then(
                |request: SeismicRequest,
                 state: Arc<RwLock<VisualizationModel>>,
                 metrics: Arc<MetricsRecorder>,
                 runner: Arc<Runner>| async move {
                    match runner.run_seismic(&request.settings, request.seed) {
                        Ok(series) => {
                            let signatures = series.responses.len();
                            state.write().unwrap().seismic = Some(series);
                            metrics.record_run();
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(
                                    &json!({"status": "ok", "signatures": signatures}),
                                ),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("seismic run error: {}", err);
                            metrics.record_error();
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = payload_route
                .or(status_route)
                .or(radar_route)
                .or(spectrometer_route)
                .or(seismic_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state, metrics }
    }

    pub fn publish(&self, model: &VisualizationModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] radar: {}, spectrometer: {}, seismic: {}",
            guard.radar.is_some(),
            guard.emissions.is_some(),
            guard.seismic.is_some()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    pub fn record_run(&self) {
        self.metrics.record_run();
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::ScenarioConfig;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = ScenarioConfig::default();
        let runner = Arc::new(Runner::new(cfg));
        let gui = GuiBridge::new(runner.clone());

        let report = runner.execute().unwrap();
        let model = VisualizationModel {
            radar: Some(report.radar),
            emissions: Some(report.emissions),
            seismic: Some(report.seismic),
        };
        gui.publish(&model).unwrap();
        gui.record_run();

        let snapshot = gui.snapshot();
        assert!(snapshot.radar.is_some());
        assert!(snapshot.emissions.is_some());
        assert!(snapshot.seismic.is_some());
    }
}
