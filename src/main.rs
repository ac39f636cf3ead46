mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use soilcheck::config::{Config, DataPaths};
use soilcheck::datasources::load_observations;
use soilcheck::error::SoilCheckError;
use soilcheck::logic::TrendReport;
use soilcheck::pipeline;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    // Our own info diagnostics (file paths being opened) show by default
    let default_level = match verbose {
        0 => "warn,soilcheck=info",
        1 => "info,soilcheck=debug",
        2 => "debug,soilcheck=trace",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = Config::load(cli.config.as_deref()).context("Configuration error")?;

    let paths = config
        .resolve_paths(
            cli.data_dir.as_deref(),
            cli.input.as_deref(),
            cli.output.as_deref(),
        )
        .context("Failed to resolve data directory")?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_analysis(&paths, cli.json),
        Commands::Check => run_check(&paths),
        Commands::Trend => run_trend(&paths, cli.json),
    }
}

fn run_analysis(paths: &DataPaths, json: bool) -> anyhow::Result<i32> {
    if !json {
        println!("Loading data from: {}", paths.input.display());
    }

    let report = match pipeline::run(paths) {
        Ok(r) => r,
        Err(SoilCheckError::NoData(path)) => {
            report_no_data(&path);
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    let summary = &report.summary;
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(0);
    }

    println!("Average Soil Moisture: {:.2}%", summary.average);
    println!("Condition Analysis: {}", summary.condition.label());
    println!("Suggested Action: {}", summary.suggestion);

    // Export failures were already logged; the run still succeeds
    if report.export.is_ok() {
        println!("Data exported to: {}", paths.output.display());
    }

    Ok(0)
}

fn run_check(paths: &DataPaths) -> anyhow::Result<i32> {
    println!("Data directory: {}", paths.data_dir.display());

    let observations = if paths.input.exists() {
        let observations = load_observations(&paths.input);
        println!(
            "Input file:     {} ({} observations)",
            paths.input.display(),
            observations.len()
        );
        observations.len()
    } else {
        println!("Input file:     {} (missing)", paths.input.display());
        0
    };

    let output_dir_ok = paths
        .output
        .parent()
        .map(|dir| dir.as_os_str().is_empty() || dir.is_dir())
        .unwrap_or(false);
    println!(
        "Output file:    {} ({})",
        paths.output.display(),
        if output_dir_ok {
            "directory OK"
        } else {
            "directory missing"
        }
    );

    Ok(if observations > 0 { 0 } else { 1 })
}

fn run_trend(paths: &DataPaths, json: bool) -> anyhow::Result<i32> {
    let observations = load_observations(&paths.input);
    if observations.is_empty() {
        report_no_data(&paths.input);
        return Ok(1);
    }

    let report = TrendReport::build(&observations);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!(
        "{:<12} {:>10} {:>10}  Condition",
        "Date", "Moisture", "7-Obs Avg"
    );
    for row in &report.rows {
        let rolling = row
            .rolling_mean
            .map(|m| format!("{:.2}", m))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:>10.2} {:>10}  {}",
            row.date, row.moisture, rolling, row.condition
        );
    }
    println!();
    println!("Drought days (< 20%): {}", report.drought_days);
    println!("Flood days (> 80%):   {}", report.flood_days);

    Ok(0)
}

fn report_no_data(path: &std::path::Path) {
    eprintln!(
        "No data found or failed to load data from: {}. Exiting program.",
        path.display()
    );
}
