//! Mock Geolocation Client
//!
//! For testing. Replays a canned fix or fails on demand, counting calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{GeoClient, GeoFix};
use crate::error::{PlannerError, Result};

/// Mock geolocation client
pub struct MockGeoClient {
    fix: Option<GeoFix>,
    calls: AtomicUsize,
}

impl MockGeoClient {
    /// Always returns the given fix
    pub fn returning(fix: GeoFix) -> Self {
        Self {
            fix: Some(fix),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails, like a provider outage
    pub fn failing() -> Self {
        Self {
            fix: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `current_fix` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoClient for MockGeoClient {
    async fn current_fix(&self) -> Result<GeoFix> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.fix
            .clone()
            .ok_or_else(|| PlannerError::Provider("mock geolocation outage".into()))
    }

    fn name(&self) -> &str {
        "MockGeo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_fix() {
        let mock = MockGeoClient::returning(GeoFix {
            city: Some("Lviv".into()),
            ..GeoFix::default()
        });

        let fix = mock.current_fix().await.unwrap();
        assert_eq!(fix.city.as_deref(), Some("Lviv"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_outage() {
        let mock = MockGeoClient::failing();
        assert!(mock.current_fix().await.is_err());
        assert_eq!(mock.calls(), 1);
    }
}
