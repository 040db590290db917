mod config;
mod history;
mod sensor;
mod trend;
mod utils;

use log::{debug, error, info};
use time::OffsetDateTime;
use tokio::time::{sleep, Duration};

use config::MonitorConfig;
use history::RollingHistory;
use sensor::read_temperature;
use trend::{classify, Trend};
use utils::format_datetime;

async fn main_loop(config: MonitorConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting temperature trend monitoring service");
    info!(
        "Sensor: {} (scale {}), polling every {}s, drift threshold {:.2}, jump threshold {:.2}",
        config.sensor_path,
        config.sensor_scale,
        config.poll_interval_secs,
        config.thresholds.drift,
        config.thresholds.jump
    );

    let mut history = RollingHistory::new();
    let mut last_trend = Trend::Steady;

    loop {
        match read_temperature(&config).await {
            Ok(temperature) => {
                history.push(temperature);
                let current = classify(&history, &config.thresholds);
                debug!("History holds {} sample(s)", history.len());

                info!("Temperature: {:.2}°C, trend: {}", temperature, current);

                if current != last_trend {
                    info!(
                        "Trend changed from {} to {} at {}",
                        last_trend,
                        current,
                        format_datetime(&OffsetDateTime::now_utc())
                    );
                    last_trend = current;
                }
            }
            Err(e) => {
                // Keep the history as-is and try again next poll.
                error!("Sensor read failed: {}", e);
            }
        }

        sleep(Duration::from_secs(config.poll_interval_secs)).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match MonitorConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(());
        }
    });

    // Run main loop or wait for shutdown signal
    tokio::select! {
        result = main_loop(config) => {
            match result {
                Ok(_) => info!("Program completed successfully"),
                Err(e) => error!("Fatal error: {}", e),
            }
        }
        _ = &mut rx => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}
