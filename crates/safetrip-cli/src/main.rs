//! SafeTrip CLI - check a planned route or live traffic against known
//! hazard zones.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safetrip_core::models::Coordinate;
use safetrip_core::{HeadingRiskEvaluator, RouteRiskEvaluator, ZoneCatalog, DEFAULT_THRESHOLD_KM};
use safetrip_feed::{assign_centroids, load_zones_or_empty, AirportIndex, OpenSkyClient};

const ALERT_PREVIEW_CHARS: usize = 200;

/// Flag hazard ("red") zones near a flight route or around live traffic
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Hazard zone JSON file
    #[arg(long, global = true, default_value = "red_zones.json")]
    zones: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a planned route between two airports for nearby hazard zones
    Route {
        /// Departure airport label, e.g. "London - GB"
        #[arg(long)]
        from: String,

        /// Destination airport label, e.g. "New Delhi - IN"
        #[arg(long)]
        to: String,

        /// Airport CSV file (OurAirports format)
        #[arg(long, default_value = "airports.csv")]
        airports: String,

        /// Flag zones within this distance of the route or either city
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_KM)]
        threshold_km: f64,
    },
    /// Snapshot live traffic near a departure point and flag aircraft
    /// heading toward the destination through hazard zones
    Traffic {
        /// Departure latitude in degrees
        #[arg(long)]
        dep_lat: f64,

        /// Departure longitude in degrees
        #[arg(long)]
        dep_lon: f64,

        /// Destination latitude in degrees
        #[arg(long)]
        dest_lat: f64,

        /// Destination longitude in degrees
        #[arg(long)]
        dest_lon: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let zones = assign_centroids(load_zones_or_empty(&cli.zones));

    match cli.command {
        Command::Route {
            from,
            to,
            airports,
            threshold_km,
        } => check_route(&from, &to, &airports, threshold_km, zones),
        Command::Traffic {
            dep_lat,
            dep_lon,
            dest_lat,
            dest_lon,
        } => check_traffic(dep_lat, dep_lon, dest_lat, dest_lon, zones).await,
    }
}

fn check_route(
    from: &str,
    to: &str,
    airports_path: &str,
    threshold_km: f64,
    zones: Vec<safetrip_core::HazardZone>,
) -> Result<()> {
    let airports = AirportIndex::from_csv_path(airports_path)
        .with_context(|| format!("failed to load airports from {airports_path}"))?;

    let origin = airports
        .lookup(from)
        .with_context(|| format!("unknown departure airport {from:?}, expected \"City - CC\""))?;
    let destination = airports
        .lookup(to)
        .with_context(|| format!("unknown destination airport {to:?}, expected \"City - CC\""))?;

    let evaluator = RouteRiskEvaluator::new(threshold_km);
    let matches = evaluator.evaluate(origin, destination, &zones);

    if matches.is_empty() {
        println!("Route and cities appear clear of known hazard zones.");
        return Ok(());
    }

    println!("Route passes near {} hazard zone(s):", matches.len());
    for m in &matches {
        println!();
        println!("  {} (~{} km away, severity {})", m.zone.country, m.distance_km, m.zone.severity);
        println!("    {}", preview(&m.zone.alert));
    }
    Ok(())
}

async fn check_traffic(
    dep_lat: f64,
    dep_lon: f64,
    dest_lat: f64,
    dest_lon: f64,
    zones: Vec<safetrip_core::HazardZone>,
) -> Result<()> {
    Coordinate::new(dep_lat, dep_lon).context("invalid departure coordinates")?;
    let destination = Coordinate::new(dest_lat, dest_lon).context("invalid destination coordinates")?;

    let client = OpenSkyClient::default();
    // One-degree box around the departure point, as the live feed query
    // is calibrated for.
    let aircraft = match client
        .states_in_bbox(dep_lat - 1.0, dep_lat + 1.0, dep_lon - 1.0, dep_lon + 1.0)
        .await
    {
        Ok(aircraft) => aircraft,
        Err(err) => {
            tracing::warn!(error = %err, "live-traffic snapshot unavailable");
            Vec::new()
        }
    };

    let catalog = ZoneCatalog::new(zones);
    let evaluator = HeadingRiskEvaluator::default();
    let risks = evaluator.evaluate_batch(&aircraft, destination, &catalog);

    if risks.is_empty() {
        println!("No aircraft near the departure point are heading toward the destination.");
        return Ok(());
    }

    println!("{} aircraft heading toward the destination:", risks.len());
    for risk in &risks {
        let callsign = risk.callsign.as_deref().unwrap_or("N/A");
        let velocity = risk
            .velocity_kmph
            .map(|v| format!("{v} km/h"))
            .unwrap_or_else(|| "N/A".to_string());
        let zone = risk.zone_alert.as_deref().unwrap_or("None");
        println!(
            "  {callsign} ({}) at ({:.4}, {:.4}) alt {} speed {velocity} risk zone: {}",
            risk.origin_country,
            risk.position.lat_deg,
            risk.position.lon_deg,
            risk.altitude_m
                .map(|a| format!("{a:.0} m"))
                .unwrap_or_else(|| "N/A".to_string()),
            preview(zone),
        );
    }
    Ok(())
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= ALERT_PREVIEW_CHARS {
        return flat;
    }
    let truncated: String = flat.chars().take(ALERT_PREVIEW_CHARS).collect();
    format!("{truncated}…")
}
