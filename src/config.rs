use std::env;

use crate::trend::Thresholds;

const DEFAULT_DRIFT_THRESHOLD: f32 = 0.5;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
const DEFAULT_SENSOR_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";
const DEFAULT_SENSOR_SCALE: f32 = 1000.0; // sysfs thermal zones report millidegrees

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub thresholds: Thresholds,
    pub poll_interval_secs: u64,
    pub sensor_path: String,
    pub sensor_scale: f32,
}

impl MonitorConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        let drift = match env::var("DRIFT_THRESHOLD") {
            Ok(value) => parse_threshold("DRIFT_THRESHOLD", &value)?,
            Err(_) => DEFAULT_DRIFT_THRESHOLD,
        };

        // Jump threshold defaults to twice the drift threshold when not
        // configured on its own.
        let thresholds = match env::var("JUMP_THRESHOLD") {
            Ok(value) => Thresholds::new(drift, parse_threshold("JUMP_THRESHOLD", &value)?),
            Err(_) => Thresholds::from_drift(drift),
        };

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid POLL_INTERVAL_SECS '{}': {}", value, e))?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        let sensor_path =
            env::var("SENSOR_PATH").unwrap_or_else(|_| DEFAULT_SENSOR_PATH.to_string());

        let sensor_scale = match env::var("SENSOR_SCALE") {
            Ok(value) => {
                let scale = value
                    .trim()
                    .parse::<f32>()
                    .map_err(|e| format!("Invalid SENSOR_SCALE '{}': {}", value, e))?;
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(format!("SENSOR_SCALE must be positive, got '{}'", value).into());
                }
                scale
            }
            Err(_) => DEFAULT_SENSOR_SCALE,
        };

        Ok(MonitorConfig {
            thresholds,
            poll_interval_secs,
            sensor_path,
            sensor_scale,
        })
    }
}

/// Parse a threshold environment variable, rejecting negative and
/// non-finite values.
fn parse_threshold(name: &str, value: &str) -> Result<f32, Box<dyn std::error::Error>> {
    let parsed = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid {} '{}': {}", name, value, e))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(format!("{} must be a non-negative number, got '{}'", name, value).into());
    }
    Ok(parsed)
}
