use anyhow::Context;
use clap::Parser;
use dilemmacore::analysis::{Decision, Evaluation};
use dilemmacore::report::EvaluationReport;
use dilemmacore::telemetry::MetricsRecorder;
use generator::scenario::{build_scenarios, GeneratorConfig};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use workflow::config::ScenarioConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Stop-or-go planner for a yellow traffic light")]
struct Args {
    /// Load the scenario from YAML instead of the flags below
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Distance to the intersection, D (7 m – 50 m)
    #[arg(long, default_value_t = 30.0)]
    distance: f64,
    /// Length of the intersection, L (7 m – 20 m)
    #[arg(long, default_value_t = 12.0)]
    length: f64,
    /// Maximum acceleration of the car (0 – 3 m/s^2)
    #[arg(long, default_value_t = 2.0)]
    max_accel: f64,
    /// Minimum acceleration of the car (-3 – 0 m/s^2)
    #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
    min_accel: f64,
    /// Duration of the yellow light, Ty (2 s – 4 s)
    #[arg(long, default_value_t = 3.0)]
    yellow: f64,
    /// Current speed, V0 (20 km/h – 80 km/h)
    #[arg(long, default_value_t = 50.0)]
    speed: f64,
    /// Speed limit (40 km/h – 90 km/h)
    #[arg(long, default_value_t = 60.0)]
    speed_limit: f64,
    /// Write the full evaluation, curves included, as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Evaluate this many random in-range scenarios and summarize decisions
    #[arg(long)]
    batch: Option<usize>,
    /// Seed for --batch
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let metrics = Arc::new(MetricsRecorder::new());
    let runner = Runner::new(metrics.clone());

    if let Some(count) = args.batch {
        let scenarios = build_scenarios(&GeneratorConfig {
            count,
            seed: args.seed,
        });
        let summary = runner.execute_batch(&scenarios);
        println!(
            "Batch of {} (seed {}): {} evaluated, {} rejected",
            scenarios.len(),
            args.seed,
            summary.evaluated(),
            summary.rejected.len()
        );
        for decision in [
            Decision::OptionZone,
            Decision::MustStop,
            Decision::MustGo,
            Decision::DilemmaZone,
        ] {
            println!("  {:<13} {}", format!("{decision:?}"), summary.count(decision));
        }
    } else {
        let config = if let Some(path) = &args.scenario {
            ScenarioConfig::load(path)?
        } else {
            ScenarioConfig::from_args(
                args.distance,
                args.length,
                args.max_accel,
                args.min_accel,
                args.yellow,
                args.speed,
                args.speed_limit,
            )
        };

        let evaluation = runner.execute(&config)?;
        print_summary(&config, &evaluation);

        if let Some(path) = &args.json {
            let report = EvaluationReport::new(&evaluation, config.name.clone());
            let body = report
                .to_json_pretty()
                .context("serializing evaluation report")?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
    }

    let (evaluations, rejections) = metrics.snapshot();
    info!("session: {} evaluations, {} rejected", evaluations, rejections);

    Ok(())
}

fn print_summary(config: &ScenarioConfig, evaluation: &Evaluation) {
    let assessment = &evaluation.assessment;
    let params = &evaluation.params;

    println!("Scenario: {}", config.label());
    println!(
        "  acceleration curve: {} samples, deceleration curve: {} samples",
        evaluation.acceleration.len(),
        evaluation.deceleration.len()
    );
    match assessment.stopping_distance {
        Some(distance) => println!(
            "  stopping distance at {:.2} m/s^2: {:.2} m (line at {:.2} m)",
            params.min_acceleration, distance, params.distance
        ),
        None => println!("  no deceleration entered"),
    }
    if let Some(needed) = assessment.required_deceleration {
        println!("  deceleration to stop at the line: {:.2} m/s^2", needed);
    }
    println!(
        "  distance in {:.2} s at {:.2} m/s^2: {:.2} m (far edge at {:.2} m)",
        params.yellow_duration,
        params.max_acceleration,
        assessment.yellow_distance,
        params.clearing_distance()
    );
    match assessment.required_acceleration {
        Some(needed) => println!("  acceleration to clear in time: {:.2} m/s^2", needed),
        None => println!("  the far edge is out of reach at any swept acceleration"),
    }
    println!("  => {}", assessment.decision.describe());
}
