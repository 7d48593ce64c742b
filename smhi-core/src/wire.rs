//! Wire shape of the SMHI `pmp3g` point forecast response.
//!
//! These types mirror the JSON document one-to-one; turning them into
//! something pleasant to work with is the job of [`crate::mapper`].

use serde::Deserialize;

use crate::error::ForecastError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForecastResponse {
    pub approved_time: String,
    pub reference_time: String,
    pub geometry: RawGeometry,
    pub time_series: Vec<RawTimeSeriesEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeSeriesEntry {
    pub valid_time: String,
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
    pub name: String,
    pub unit: String,
    pub values: Vec<f64>,
}

impl RawParameter {
    /// SMHI sends a one-element list for every point parameter.
    pub fn first_value(&self) -> Option<f64> {
        self.values.first().copied()
    }
}

/// Decodes a raw response body. Either the whole document matches or
/// nothing is returned.
pub fn decode(bytes: &[u8]) -> Result<RawForecastResponse, ForecastError> {
    Ok(serde_json::from_slice(bytes)?)
}
