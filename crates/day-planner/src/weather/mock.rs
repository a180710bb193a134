//! Mock Weather Client
//!
//! For testing. Replays canned realtime values or fails on demand,
//! counting calls and recording the requested coordinates.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{RealtimeValues, WeatherClient};
use crate::error::{PlannerError, Result};

/// Mock weather client
pub struct MockWeatherClient {
    values: Option<RealtimeValues>,
    calls: AtomicUsize,
    requested: Mutex<Vec<(f64, f64)>>,
}

impl MockWeatherClient {
    /// Always returns the given values
    pub fn returning(values: RealtimeValues) -> Self {
        Self {
            values: Some(values),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Always fails, like a provider outage
    pub fn failing() -> Self {
        Self {
            values: None,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `realtime` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Coordinates passed to `realtime`, in call order
    pub fn requested(&self) -> Vec<(f64, f64)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherClient for MockWeatherClient {
    async fn realtime(&self, lat: f64, lng: f64) -> Result<RealtimeValues> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push((lat, lng));

        self.values
            .ok_or_else(|| PlannerError::Provider("mock weather outage".into()))
    }

    fn name(&self) -> &str {
        "MockWeather"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_coordinates() {
        let mock = MockWeatherClient::returning(RealtimeValues {
            temperature_apparent: 18.0,
            weather_code: 1001,
        });

        let values = mock.realtime(50.45, 30.52).await.unwrap();
        assert_eq!(values.weather_code, 1001);
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.requested(), vec![(50.45, 30.52)]);
    }
}
