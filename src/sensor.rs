/// Temperature sample source
use log::debug;

use crate::config::MonitorConfig;

/// Read one temperature sample from the configured sensor file.
///
/// The sensor is expected to expose a single numeric value per read,
/// sysfs thermal-zone style (e.g. millidegrees Celsius in
/// `/sys/class/thermal/thermal_zone0/temp`). The raw value is divided
/// by the configured scale to obtain degrees.
///
/// # Arguments
/// * `config` - Configuration with sensor path and raw-value scale
///
/// # Returns
/// Result with the temperature in degrees, or error if the read or
/// parse fails
pub async fn read_temperature(config: &MonitorConfig) -> Result<f32, Box<dyn std::error::Error>> {
    let raw = tokio::fs::read_to_string(&config.sensor_path)
        .await
        .map_err(|e| format!("Failed to read sensor '{}': {}", config.sensor_path, e))?;

    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid sensor value '{}': {}", raw.trim(), e))?;

    let temperature = value / config.sensor_scale;
    debug!(
        "Sensor read from {}: raw={} scaled={:.3}",
        config.sensor_path,
        raw.trim(),
        temperature
    );

    Ok(temperature)
}
