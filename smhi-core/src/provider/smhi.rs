use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::ForecastError,
    model::{Coordinates, PointForecast},
    provider::{ClientSettings, ForecastProvider},
};

const POINT_FORECAST_PATH: &str = "api/category/pmp3g/version/2/geotype/point";

/// HTTP client for SMHI's open `pmp3g` point forecast API.
#[derive(Debug, Clone)]
pub struct SmhiClient {
    base_url: String,
    http: Client,
}

impl SmhiClient {
    /// Client against the public SMHI endpoint with default timeout.
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_settings(ClientSettings::default())
    }

    pub fn with_settings(settings: ClientSettings) -> Result<Self, ForecastError> {
        let http = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Coordinates are written with six decimals, which is what the API
    /// expects in the path.
    pub fn forecast_url(&self, lon: f64, lat: f64) -> String {
        format!(
            "{}/{}/lon/{:.6}/lat/{:.6}/data.json",
            self.base_url, POINT_FORECAST_PATH, lon, lat
        )
    }

    /// Fetches and maps the point forecast for `lon`/`lat`.
    pub async fn get_point_forecast(
        &self,
        lon: f64,
        lat: f64,
    ) -> Result<PointForecast, ForecastError> {
        let url = self.forecast_url(lon, lat);
        tracing::debug!(%url, "requesting SMHI point forecast");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "SMHI responded");

        if !status.is_success() {
            return Err(ForecastError::Http {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        PointForecast::decode_and_map(&body)
    }
}

#[async_trait]
impl ForecastProvider for SmhiClient {
    async fn point_forecast(&self, location: Coordinates) -> Result<PointForecast, ForecastError> {
        self.get_point_forecast(location.lon, location.lat).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
