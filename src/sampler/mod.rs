//! Scheduled sensor sampling.
//!
//! The sampler reads the sensor once per period, converts the raw millidegree
//! value to degrees Celsius and appends a reading to the store. A failed cycle
//! is logged and skipped; the next tick runs as if nothing happened.

pub mod sensor;

pub use sensor::{TemperatureSensor, ThermalZoneSensor, DEFAULT_SENSOR_PATH};

use crate::error::{Result, StationError};
use crate::reading::{millidegrees_to_celsius, NewReading, Reading};
use crate::store::ReadingStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::{wrappers::IntervalStream, StreamExt};
use tracing::{debug, error, info};

/// Periodically turns sensor values into stored readings.
pub struct Sampler<S> {
    sensor: S,
    store: Arc<dyn ReadingStore>,
}

impl<S: TemperatureSensor + 'static> Sampler<S> {
    pub fn new(sensor: S, store: Arc<dyn ReadingStore>) -> Self {
        Self { sensor, store }
    }

    /// Read the sensor once, without storing anything.
    pub async fn read_temperature(&self) -> Result<f64> {
        let raw = self.sensor.read_raw().await?;
        millidegrees_to_celsius(&raw)
    }

    /// Run one sampling cycle and return the stored reading.
    pub async fn sample_once(&self) -> Result<Reading> {
        let temperature = self.read_temperature().await?;
        self.store.insert(NewReading::now(temperature)).await
    }

    /// Run one sampling cycle, logging instead of returning failures.
    pub async fn tick(&self) -> Option<Reading> {
        match self.sample_once().await {
            Ok(reading) => {
                debug!("Recorded {:.3}°C as reading {}", reading.temperature, reading.id);
                Some(reading)
            }
            Err(StationError::SensorUnavailable(path)) => {
                error!("Temperature file not found: {}", path.display());
                None
            }
            Err(err @ StationError::InvalidReading(_)) => {
                error!("Dropping sample: {}", err);
                None
            }
            Err(err) => {
                error!("Sampling cycle failed: {}", err);
                None
            }
        }
    }

    /// Sample forever, once per `period`. The first cycle runs immediately.
    ///
    /// Ticks are measured from when the loop starts, not aligned to
    /// wall-clock minute boundaries. A cycle that overruns delays the next
    /// one instead of bursting to catch up.
    pub async fn run(self, period: Duration) {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = IntervalStream::new(interval);

        info!("Sampling every {}s", period.as_secs());
        while ticks.next().await.is_some() {
            self.tick().await;
        }
    }

    /// Spawn [`Sampler::run`] onto the runtime.
    pub fn spawn(self, period: Duration) -> JoinHandle<()> {
        tokio::spawn(self.run(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Sensor that replays a script of raw values; `None` means "absent".
    struct ScriptedSensor {
        values: Mutex<Vec<Option<&'static str>>>,
    }

    impl ScriptedSensor {
        fn new(mut values: Vec<Option<&'static str>>) -> Self {
            values.reverse();
            Self {
                values: Mutex::new(values),
            }
        }
    }

    impl TemperatureSensor for ScriptedSensor {
        async fn read_raw(&self) -> Result<String> {
            let next = self.values.lock().unwrap().pop().flatten();
            next.map(str::to_string)
                .ok_or_else(|| StationError::SensorUnavailable("scripted".into()))
        }
    }

    #[tokio::test]
    async fn test_sample_once_stores_celsius() {
        let store = Arc::new(MemoryStore::new());
        let sampler = Sampler::new(ScriptedSensor::new(vec![Some("48312\n")]), store.clone());

        let reading = sampler.sample_once().await.unwrap();
        assert_eq!(reading.temperature, 48.312);
        assert_eq!(store.list().await.unwrap(), vec![reading]);
    }

    #[tokio::test]
    async fn test_failed_cycles_are_skipped() {
        let store = Arc::new(MemoryStore::new());
        let sensor = ScriptedSensor::new(vec![None, Some("garbage"), Some("40000")]);
        let sampler = Sampler::new(sensor, store.clone());

        assert!(sampler.tick().await.is_none());
        assert!(sampler.tick().await.is_none());
        assert!(store.is_empty().await);

        let reading = sampler.tick().await.unwrap();
        assert_eq!(reading.temperature, 40.0);
        assert_eq!(store.len().await, 1);
    }

    /// Store whose first insert fails, delegating to memory afterwards.
    #[derive(Default)]
    struct FlakyStore {
        failed: AtomicBool,
        inner: MemoryStore,
    }

    #[async_trait]
    impl ReadingStore for FlakyStore {
        async fn insert(&self, reading: NewReading) -> Result<Reading> {
            if !self.failed.swap(true, Ordering::SeqCst) {
                return Err(StationError::store_error("connection reset"));
            }
            self.inner.insert(reading).await
        }

        async fn list(&self) -> Result<Vec<Reading>> {
            self.inner.list().await
        }
    }

    #[tokio::test]
    async fn test_store_failure_skips_cycle() {
        let store = Arc::new(FlakyStore::default());
        let sensor = ScriptedSensor::new(vec![Some("41000"), Some("42000")]);
        let sampler = Sampler::new(sensor, store.clone());

        assert!(sampler.tick().await.is_none());
        assert!(store.inner.is_empty().await);

        let reading = sampler.tick().await.unwrap();
        assert_eq!(reading.temperature, 42.0);
        assert_eq!(store.list().await.unwrap(), vec![reading]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_samples_on_schedule() {
        let store = Arc::new(MemoryStore::new());
        let sensor = ScriptedSensor::new(vec![Some("1000"), Some("2000"), Some("3000")]);
        let handle = Sampler::new(sensor, store.clone()).spawn(Duration::from_secs(60));

        time::sleep(Duration::from_secs(1)).await;
        assert_eq!(store.len().await, 1);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(store.len().await, 2);

        handle.abort();
    }
}
