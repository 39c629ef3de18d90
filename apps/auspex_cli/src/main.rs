mod render;

use anyhow::Context;
use auspex::aspects::AspectCalculator;
use auspex::election::{parse_date, DEFAULT_PROJECT_KEY};
use auspex::ephemeris::{julian_day, GeoLocation, SwissEphemerisAdapter};
use auspex::hours::planetary_hours;
use auspex::lunar::moon_report;
use auspex::scoring::ScoringEngine;
use auspex::{ProjectType, RangeScanner, ScanRequest};
use auspex_config::{load_settings, AuspexSettings};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "auspex", author, version, about = "Rank calendar days for starting a venture")]
struct Cli {
    /// TOML file with weights, orbs and scan limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the Swiss Ephemeris data files
    #[arg(long, global = true)]
    ephemeris: Option<PathBuf>,

    /// Print pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the best days of a date window
    Scan {
        #[arg(long, help = "First day, YYYY-MM-DD")]
        from: String,
        #[arg(long, help = "Last day, YYYY-MM-DD")]
        to: String,
        #[arg(long, default_value = DEFAULT_PROJECT_KEY)]
        project: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Score a single day
    Score {
        #[arg(long)]
        date: String,
        #[arg(long, default_value = DEFAULT_PROJECT_KEY)]
        project: String,
    },
    /// Lunar conditions for a day
    Moon {
        #[arg(long)]
        date: String,
    },
    /// Planetary hours for a day
    Hours {
        #[arg(long)]
        date: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    log::debug!("Settings: {:?}", settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Scan {
            from,
            to,
            project,
            name,
            lat,
            lon,
        } => {
            let location = GeoLocation {
                lat: lat.unwrap_or(settings.default_location.lat),
                lon: lon.unwrap_or(settings.default_location.lon),
            };
            let request = ScanRequest {
                name: name.clone(),
                project_type: project.clone(),
                start: from.clone(),
                end: to.clone(),
                location,
            };
            let report = scanner(&cli, &settings)?.run(&request)?;
            emit(&mut out, cli.json, &report, render::report)?;
        }
        Command::Score { date, project } => {
            let date = parse_date("date", date)?;
            let day = scanner(&cli, &settings)?.score_day(date, ProjectType::lookup(project));
            emit(&mut out, cli.json, &day, render::scored_day)?;
        }
        Command::Moon { date } => {
            let date = parse_date("date", date)?;
            let jd = julian_day(date, settings.scan.reference_hour);
            let report = moon_report(&adapter(&cli, &settings)?, jd);
            emit(&mut out, cli.json, &report, render::moon)?;
        }
        Command::Hours { date } => {
            let date = parse_date("date", date)?;
            let hours = planetary_hours(date);
            emit(&mut out, cli.json, &hours, |w, h| render::hours(w, h))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn adapter(cli: &Cli, settings: &AuspexSettings) -> anyhow::Result<SwissEphemerisAdapter> {
    let path = cli
        .ephemeris
        .clone()
        .or_else(|| settings.ephemeris_path.clone());
    SwissEphemerisAdapter::new(path).context("Could not open the Swiss Ephemeris")
}

fn scanner(
    cli: &Cli,
    settings: &AuspexSettings,
) -> anyhow::Result<RangeScanner<SwissEphemerisAdapter>> {
    let engine = ScoringEngine::with_settings(
        adapter(cli, settings)?,
        settings.weights,
        AspectCalculator::with_orbs(settings.orbs),
    );
    Ok(RangeScanner::new(engine, settings.scan))
}

fn emit<W, T, F>(out: &mut W, json: bool, value: &T, text: F) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        text(out, value)?;
    }
    Ok(())
}
