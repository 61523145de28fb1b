use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use booking_harvester::adapters::browser::ChromeDriver;
use booking_harvester::adapters::sink::JsonFileSink;
use booking_harvester::config::load_config;
use booking_harvester::error::HarvestError;
use booking_harvester::ports::page_driver::PageDriver;
use booking_harvester::ports::record_sink::RecordSink;
use booking_harvester::scrape::Orchestrator;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting booking-harvester");

    let config_path = find_config_path();
    let config = load_config(&config_path)?;

    let sink: Arc<dyn RecordSink> = Arc::new(
        JsonFileSink::new(&config.output.dir)
            .with_context(|| format!("failed to prepare output directory {}", config.output.dir))?,
    );

    // Losing the browser is the one unrecoverable failure
    let driver: Arc<dyn PageDriver> = Arc::new(
        ChromeDriver::launch(&config.scraper).context("failed to launch the browser")?,
    );

    let cancelled = Arc::new(AtomicBool::new(false));
    let cancel_flag = Arc::clone(&cancelled);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, finishing current step then stopping");
            cancel_flag.store(true, Ordering::SeqCst);
        }
    });

    let orchestrator = Orchestrator::new(
        Arc::clone(&driver),
        sink,
        config,
        Arc::clone(&cancelled),
    );

    let outcome = orchestrator.run().await;

    // Teardown runs on every exit path, interrupt included
    if let Err(err) = driver.close().await {
        tracing::warn!(error = %err, "browser teardown reported an error");
    }

    match outcome {
        Ok(()) => {
            tracing::info!("Harvest complete");
            Ok(())
        }
        Err(HarvestError::Cancelled) => {
            tracing::warn!("Harvest interrupted, partial output kept");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
