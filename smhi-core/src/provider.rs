use crate::{
    Config,
    error::ForecastError,
    model::{Coordinates, PointForecast},
    provider::smhi::SmhiClient,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod smhi;

pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metfcst.smhi.se";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`SmhiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    /// Upper bound for the whole request, connect through body.
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn point_forecast(&self, location: Coordinates) -> Result<PointForecast, ForecastError>;
}

/// Construct a provider from the on-disk configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let client = SmhiClient::with_settings(config.client_settings())?;
    Ok(Box::new(client))
}

/// Fetches the point forecast for `lon`/`lat` with a default client.
pub async fn get_point_forecast(lon: f64, lat: f64) -> Result<PointForecast, ForecastError> {
    SmhiClient::new()?.get_point_forecast(lon, lat).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_smhi() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "https://opendata-download-metfcst.smhi.se");
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn provider_from_default_config_builds() {
        let provider = provider_from_config(&Config::default());
        assert!(provider.is_ok());
    }
}
