//! Compare sequential and concurrent text search over a slowed-down catalogue.
//!
//! Every repository call sleeps for `--delay-ms` so that the fan-out gain is
//! visible without a real storage backend.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveTime};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;

use nearby_eats::domain::ports::RestaurantQuery;
use nearby_eats::domain::{
    DEFAULT_SEARCH_WORKERS, GeoCache, Restaurant, RestaurantQueryPorts, RestaurantQueryService,
    SearchCriteria, ServingRadiusPolicy,
};
use nearby_eats::outbound::catalogue::{SimulatedLatency, load_catalogue};

/// `search-latency` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "search-latency",
    about = "Time sequential against concurrent restaurant search",
    version
)]
struct CliArgs {
    /// Catalogue seed to search.
    #[arg(long, value_name = "path", default_value_os_t = default_catalogue_path())]
    catalogue: PathBuf,
    /// Text to search for.
    #[arg(long, default_value = "tikka")]
    query: String,
    #[arg(long, default_value_t = 12.9716, allow_negative_numbers = true)]
    latitude: f64,
    #[arg(long, default_value_t = 77.5946, allow_negative_numbers = true)]
    longitude: f64,
    /// Time of day as `HH:MM`; defaults to the local clock.
    #[arg(long, value_name = "HH:MM", value_parser = parse_time_of_day)]
    at: Option<NaiveTime>,
    /// Delay added to every repository call.
    #[arg(long = "delay-ms", default_value_t = 100)]
    delay_ms: u64,
    /// Concurrent strategy runs.
    #[arg(long, default_value_t = DEFAULT_SEARCH_WORKERS)]
    workers: usize,
}

fn default_catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|error| format!("expected HH:MM: {error}"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> Result<()> {
    let catalogue = load_catalogue(&args.catalogue)
        .wrap_err_with(|| format!("load catalogue {}", args.catalogue.display()))?;
    let slowed = Arc::new(SimulatedLatency::new(
        catalogue,
        Duration::from_millis(args.delay_ms),
    ));
    let service = RestaurantQueryService::new(
        RestaurantQueryPorts {
            restaurants: slowed.clone(),
            menus: slowed,
            cache: GeoCache::disabled(),
        },
        ServingRadiusPolicy::default(),
        args.workers,
    );

    let at = args.at.unwrap_or_else(|| Local::now().time());
    let criteria = SearchCriteria::new(args.latitude, args.longitude, args.query.as_str(), at)
        .wrap_err("invalid search location")?;

    let started = Instant::now();
    let sequential = service.search(&criteria).await?;
    let sequential_elapsed = started.elapsed();

    let started = Instant::now();
    let concurrent = service.search_concurrent(&criteria).await?;
    let concurrent_elapsed = started.elapsed();

    if ids(&sequential) != ids(&concurrent) {
        return Err(eyre!(
            "concurrent search returned {:?}, sequential returned {:?}",
            ids(&concurrent),
            ids(&sequential)
        ));
    }

    println!("query={}", criteria.query());
    println!("at={}", at.format("%H:%M"));
    println!("matches={}", sequential.len());
    println!("sequential_ms={}", sequential_elapsed.as_millis());
    println!("concurrent_ms={}", concurrent_elapsed.as_millis());
    println!(
        "speedup={:.2}",
        sequential_elapsed.as_secs_f64() / concurrent_elapsed.as_secs_f64().max(f64::EPSILON)
    );
    for restaurant in &sequential {
        println!("{}\t{}", restaurant.id(), restaurant.name());
    }
    Ok(())
}

fn ids(found: &[Restaurant]) -> Vec<&str> {
    found.iter().map(|restaurant| restaurant.id().as_str()).collect()
}
