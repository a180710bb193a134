//! ipapi.co Geolocation Client
//!
//! One GET against the fixed JSON endpoint; the caller's IP is implicit.

use async_trait::async_trait;

use super::{GeoClient, GeoFix};
use crate::error::Result;

const IPAPI_URL: &str = "https://ipapi.co/json/";

/// Live geolocation client backed by ipapi.co
pub struct IpApiClient {
    http: reqwest::Client,
}

impl IpApiClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GeoClient for IpApiClient {
    async fn current_fix(&self) -> Result<GeoFix> {
        let fix = self
            .http
            .get(IPAPI_URL)
            .send()
            .await?
            .error_for_status()?
            .json::<GeoFix>()
            .await?;

        tracing::debug!(?fix, "ipapi.co responded");
        Ok(fix)
    }

    fn name(&self) -> &str {
        "ipapi.co"
    }
}
