use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::Duration;

use rerender_lab::args::{Cli, Command, OutputFormat, SimulateDemo};
use rerender_lab::config::Config;
use rerender_lab::demo::satisfaction::SatisfactionLevel;
use rerender_lab::demo::RenderLog;
use rerender_lab::logging::{init_tracing, LogSink};
use rerender_lab::shutdown::ShutdownHandle;
use rerender_lab::simulate::{
    parse_actions, parse_levels, simulate_counter, simulate_face, SimulationReport,
};
use rerender_lab::ui::app::App;

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Could not load configuration")?;

    match cli.command {
        Command::Simulate { demo, format } => {
            init_tracing(&config.logging, LogSink::Stderr)
                .context("Could not initialise logging")?;
            let report = match demo {
                SimulateDemo::Counter { actions } => simulate_counter(&parse_actions(&actions)?),
                SimulateDemo::Face {
                    variant,
                    level,
                    levels,
                } => {
                    let initial = initial_level(level, &config);
                    simulate_face(variant, initial, &parse_levels(&levels)?)
                }
            };
            print_report(&report, format)
        }
        Command::Counter => {
            let log = RenderLog::new(config.ui.log_panel_lines);
            run_interactive(&config, App::counter(log))
        }
        Command::Face { variant, level } => {
            let log = RenderLog::new(config.ui.log_panel_lines);
            let initial = initial_level(level, &config);
            run_interactive(&config, App::face(variant, initial, config.slider.step, log))
        }
    }
}

fn initial_level(flag: Option<i64>, config: &Config) -> SatisfactionLevel {
    SatisfactionLevel::new(flag.unwrap_or(config.slider.initial_level))
}

fn print_report(report: &SimulationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn run_interactive(config: &Config, app: App) -> Result<()> {
    let default_log = Config::default_log_path();
    let log_path: &Path = config.logging.file.as_deref().unwrap_or(&default_log);
    init_tracing(&config.logging, LogSink::File(log_path))
        .with_context(|| format!("Could not open log file '{}'", log_path.display()))?;

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Could not install signal handlers")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    rerender_lab::ui::run(app, tick_rate, shutdown).context("Terminal UI failed")
}
