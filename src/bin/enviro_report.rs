//! Environmental report CLI.
//!
//! Runs the climate prediction, carbon balance and indoor plant simulators
//! once and prints the combined report.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use enviro_sim::config::{GeocodeConfig, PredictorConfig};
use enviro_sim::{
    analyze_indoor_plant, simulate_carbon_cycle, ClimatePredictor, EnvironmentalReport,
    Hemisphere, ReportFormatter, ReverseGeocoder,
};

/// Virtual environmental modeling report.
#[derive(Parser)]
#[command(name = "enviro_report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location name used for the forecast.
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,

    /// Latitude for automatic location detection (requires --lon).
    /// The geocoder honours GEOCODE_BASE_URL, GEOCODE_USER_AGENT and GEOCODE_TIMEOUT_SECS.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude for automatic location detection (requires --lat).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Forecast date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Hemisphere used for season lookup.
    #[arg(long, default_value = "northern")]
    hemisphere: Hemisphere,

    /// Emission source category.
    #[arg(long, default_value = "Factory")]
    emission_source: String,

    /// Sequestration effort category.
    #[arg(long, default_value = "Afforestation")]
    sequestration_effort: String,

    /// Indoor plant species.
    #[arg(short, long, default_value = "Snake Plant")]
    plant: String,

    /// Room size in square meters.
    #[arg(short, long, default_value = "15.0")]
    room_size: f64,

    /// Random seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "enviro_sim=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.room_size.is_finite() || cli.room_size < 0.0 {
        bail!("--room-size must be a non-negative number, got {}", cli.room_size);
    }

    let location = match (cli.location, cli.lat, cli.lon) {
        (Some(location), _, _) => location,
        (None, Some(lat), Some(lon)) => {
            let config = GeocodeConfig::from_env()?;
            tracing::debug!("Reverse geocoding via {}", config.base_url);
            let geocoder = ReverseGeocoder::new(&config)
                .context("Failed to build geocoding client")?;
            let name = geocoder.reverse_geocode(lat, lon).await;
            tracing::info!("Location detected: {}", name);
            name
        }
        _ => bail!("either --location or --lat/--lon is required"),
    };

    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let predictor = ClimatePredictor::new(PredictorConfig { hemisphere: cli.hemisphere });
    let report = EnvironmentalReport {
        prediction: predictor.predict(&location, date, &mut rng),
        carbon: simulate_carbon_cycle(&cli.emission_source, &cli.sequestration_effort, &mut rng),
        plant: analyze_indoor_plant(&cli.plant, cli.room_size, &mut rng),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("==================================================");
        println!("     VIRTUAL ENVIRONMENTAL MODELING SYSTEM");
        println!("==================================================\n");
        print!("{}", ReportFormatter::format(&report));
    }

    Ok(())
}
