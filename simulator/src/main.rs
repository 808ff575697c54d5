use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ScenarioConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Driver for the synthetic sensor simulation suite")]
struct Args {
    /// Run all three engines once offline and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a scenario config from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Override the number of radar time steps
    #[arg(long)]
    time_steps: Option<usize>,
    /// Seed for the seismic noise source
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the GUI bridge alive for incoming run requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario_config = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::default()
    };
    if let Some(time_steps) = args.time_steps {
        scenario_config.radar.time_steps = time_steps;
    }
    if args.seed.is_some() {
        scenario_config.seismic.seed = args.seed;
    }

    let runner = Runner::new(scenario_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let report = runner.execute()?;

        println!(
            "Offline run -> radar targets {}, spectrometer events {}, seismic signatures {}",
            report.radar.positions.len(),
            report.emissions.emissions.len(),
            report.seismic.responses.len()
        );

        let model = VisualizationModel {
            radar: Some(report.radar.clone()),
            emissions: Some(report.emissions.clone()),
            seismic: Some(report.seismic.clone()),
        };
        gui_bridge.publish(&model)?;
        gui_bridge.record_run();
        gui_bridge.publish_status("Offline simulation results ready.");

        let summary = format!(
            "targets={} steps={} events={} signatures={} samples={}\n",
            report.radar.positions.len(),
            scenario_config.radar.time_steps,
            report.emissions.emissions.len(),
            report.seismic.responses.len(),
            report.seismic.frequencies.len()
        );
        let report_path = PathBuf::from("tools/data/offline_run.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(summary.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
