//! weathercal: fetch daily forecasts, store them locally, and sync them as
//! all-day calendar events.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use weathercal_calendar::CalendarClient;
use weathercal_core::Config;
use weathercal_forecast::render;
use weathercal_store::ForecastStore;
use weathercal_weather::ForecastClient;

/// Fetch daily weather forecasts, store them locally, and sync them as
/// all-day calendar events.
#[derive(Debug, Parser)]
#[command(name = "weathercal", version, about)]
struct Cli {
    /// Location to forecast, e.g. "Munich, Germany". Repeatable; overrides
    /// the configured list.
    #[arg(short, long)]
    location: Vec<String>,

    /// Number of forecast days to fetch.
    #[arg(short, long)]
    days: Option<u8>,

    /// Path to the configuration file, overriding the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the forecast database, overriding the configured path.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Fetch, format, and store only; skip calendar sync.
    #[arg(long)]
    no_sync: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    weathercal_core::init()?;
    let cli = Cli::parse();
    let (config, _) = match &cli.config {
        Some(path) => Config::load_validated_from(path)?,
        None => Config::load_validated()?,
    };

    let locations = if cli.location.is_empty() {
        config.locations.clone()
    } else {
        cli.location.clone()
    };
    if locations.is_empty() {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        anyhow::bail!(
            "No locations to process. Pass --location or set `locations` in {}",
            config_path.display()
        );
    }

    let days = cli.days.unwrap_or(config.forecast_days);
    let db_path = cli.db.clone().unwrap_or_else(|| config.database_path.clone());
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
    }
    let store = ForecastStore::open(&db_path)
        .with_context(|| format!("Failed to open forecast store at {}", db_path.display()))?;

    let weather = ForecastClient::with_base_urls(&config.api.forecast_url, &config.api.geocode_url)
        .context("Failed to build weather client")?;

    let calendar = if cli.no_sync {
        None
    } else {
        let token = std::env::var(&config.calendar.token_env).with_context(|| {
            format!(
                "Calendar access token not found in ${} (use --no-sync to skip calendar sync)",
                config.calendar.token_env
            )
        })?;
        Some(CalendarClient::new(&token))
    };

    for location in &locations {
        if let Err(e) = run_cycle(&weather, &store, calendar.as_ref(), &config, location, days).await
        {
            tracing::error!("Forecast cycle failed for {location}: {e:#}");
        }
    }

    report_stored(&store)?;
    Ok(())
}

/// One fetch → format → store → sync pass for a single location.
async fn run_cycle(
    weather: &ForecastClient,
    store: &ForecastStore,
    calendar: Option<&CalendarClient>,
    config: &Config,
    location: &str,
    days: u8,
) -> Result<()> {
    let mut forecasts = weather
        .fetch_forecasts(location, days, config.start_hour, config.end_hour)
        .await
        .with_context(|| format!("Failed to fetch forecasts for {location}"))?;
    tracing::info!("Fetched {} day(s) for {location}", forecasts.len());

    let mut sync_enabled = calendar.is_some();
    for forecast in &mut forecasts {
        render(forecast);
        store
            .upsert(forecast)
            .with_context(|| format!("Failed to store forecast for {}", forecast.date))?;

        if !sync_enabled {
            continue;
        }
        if let Some(client) = calendar {
            match client
                .upsert_event(
                    &config.calendar.calendar_id,
                    forecast.date,
                    &forecast.summary,
                    &forecast.location,
                    Some(forecast.description.as_str()),
                )
                .await
            {
                Ok(event) => {
                    tracing::info!("Synced {} as event {}", forecast.date, event.id);
                }
                Err(e) if e.is_auth_error() => {
                    // Remaining days would fail the same way.
                    tracing::error!("Calendar authentication failed, disabling sync: {e}");
                    sync_enabled = false;
                }
                Err(e) => {
                    tracing::error!("Calendar sync failed for {}: {e}", forecast.date);
                }
            }
        }
    }
    Ok(())
}

/// Log what ended up in the store after this run.
fn report_stored(store: &ForecastStore) -> Result<()> {
    let stored = store.list_all().context("Failed to read back stored forecasts")?;
    tracing::info!("Total forecasts stored: {}", stored.len());
    for record in &stored {
        tracing::info!("Stored forecast: {} {} - {}", record.date, record.location, record.summary);
    }
    Ok(())
}
