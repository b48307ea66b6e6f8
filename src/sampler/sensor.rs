//! Temperature sensor sources.

use crate::error::{Result, StationError};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the CPU thermal zone on a Raspberry Pi.
pub const DEFAULT_SENSOR_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Something that yields a raw temperature value in millidegrees Celsius.
pub trait TemperatureSensor: Send + Sync {
    /// Read the raw, unparsed sensor text.
    ///
    /// A sensor that does not exist reports [`StationError::SensorUnavailable`].
    fn read_raw(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Sensor backed by a sysfs thermal zone file.
#[derive(Debug, Clone)]
pub struct ThermalZoneSensor {
    path: PathBuf,
}

impl ThermalZoneSensor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ThermalZoneSensor {
    fn default() -> Self {
        Self::new(DEFAULT_SENSOR_PATH)
    }
}

impl TemperatureSensor for ThermalZoneSensor {
    async fn read_raw(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StationError::SensorUnavailable(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let sensor = ThermalZoneSensor::new("/nonexistent/thermal_zone9/temp");
        let result = sensor.read_raw().await;
        assert!(matches!(result, Err(StationError::SensorUnavailable(_))));
    }

    #[test]
    fn test_default_path() {
        let sensor = ThermalZoneSensor::default();
        assert_eq!(sensor.path(), Path::new(DEFAULT_SENSOR_PATH));
    }
}
