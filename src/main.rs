use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use trekking_advisor::advisory::SimulatedWeather;
use trekking_advisor::weather::synthetic;
use trekking_advisor::{
    AdvisorConfig, AdvisorError, AdvisoryService, Location, LocationParser, Season,
    WeatherApiClient, logging,
};

/// Weather safety advisories for popular trekking routes in Nepal
#[derive(Debug, Parser)]
#[command(name = "trekking-advisor", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging and print configuration details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the built-in trekking sites
    Sites,

    /// Current weather, risk and recommendations for built-in sites
    Advise {
        /// Site name, e.g. "Everest Base Camp"
        site: Option<String>,

        /// Assess every built-in site
        #[arg(long, conflicts_with = "site")]
        all: bool,
    },

    /// Current weather and risk for arbitrary coordinates
    Check {
        /// Coordinates as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        coords: String,

        /// Altitude in meters; enables the simulated reading
        #[arg(long)]
        altitude: Option<f64>,
    },

    /// Generate a synthetic reading for an altitude
    Simulate {
        /// Altitude in meters
        #[arg(long)]
        altitude: f64,

        /// Season to simulate (defaults to the current one)
        #[arg(long)]
        season: Option<Season>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<AdvisorError>() {
                Some(advisor_error) => eprintln!("Error: {}", advisor_error.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AdvisorConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;
    debug!("Configuration loaded");

    let Some(command) = cli.command else {
        print_banner(&cli, &config);
        return Ok(());
    };

    match command {
        Command::Sites => {
            let sites = Location::known_sites();
            if cli.json {
                print_json(&sites)?;
            } else {
                println!("Trekking sites:");
                for site in &sites {
                    println!(
                        "  {:<20} {:>5.0}m  {}",
                        site.name,
                        site.altitude_m.unwrap_or_default(),
                        site.format_coordinates()
                    );
                }
            }
        }
        Command::Advise { site, all } => {
            let locations = match site {
                Some(name) if !all => vec![LocationParser::resolve_site(&name)?],
                _ => Location::known_sites(),
            };
            let service = AdvisoryService::new(WeatherApiClient::new(&config.weather)?);
            let advisories = service.advise_all(locations).await;

            if cli.json {
                print_json(&advisories)?;
            } else {
                let separator = "=".repeat(50);
                for advisory in &advisories {
                    println!("{advisory}");
                    println!("{separator}");
                }
            }
        }
        Command::Check { coords, altitude } => {
            let location = LocationParser::resolve_coordinates(&coords, altitude)?;
            let service = AdvisoryService::new(WeatherApiClient::new(&config.weather)?);
            let advisory = service.advise(location).await;

            if cli.json {
                print_json(&advisory)?;
            } else {
                println!("{advisory}");
            }
        }
        Command::Simulate { altitude, season } => {
            LocationParser::validate_altitude(altitude)?;
            let season = season.unwrap_or_else(Season::current);
            let record = synthetic::generate_with(altitude, season, &mut rand::rng());
            let simulated = SimulatedWeather::new(season, altitude, record);

            if cli.json {
                print_json(&simulated)?;
            } else {
                println!("Season: {}", simulated.season);
                println!("Altitude: {:.0}m", simulated.altitude_m);
                println!("{}", simulated.record);
                println!("Safety Assessment: {}", simulated.risk);
                println!("{}", simulated.risk.advisory());
            }
        }
    }

    Ok(())
}

fn print_banner(cli: &Cli, config: &AdvisorConfig) {
    println!("Trekking Advisor v{}", trekking_advisor::VERSION);
    println!("Weather safety advisories for popular trekking routes in Nepal.");
    println!();

    if config.weather.api_key.is_none() {
        println!("No OpenWeatherMap API key configured; live lookups will report Unknown.");
        println!("Set TREK_ADVISOR_WEATHER__API_KEY or add [weather] api_key to your config file.");
        println!();
    }

    if cli.verbose {
        let config_path = cli
            .config
            .clone()
            .or_else(AdvisorConfig::get_config_path)
            .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());
        println!("Using config from: {config_path}");
        println!("Weather endpoint: {}", config.weather.base_url);
        println!("Request timeout: {}s", config.weather.timeout_seconds);
        println!("Log level: {}", config.logging.level);
        println!();
    }

    println!("Run with --help to see available commands.");
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
