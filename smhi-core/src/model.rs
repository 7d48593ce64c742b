use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{Descriptions, PrecipitationCategory, WeatherSymbol};

/// A longitude/latitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lon {:.6}, lat {:.6}", self.lon, self.lat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

/// Forecast for a single point, as approved by SMHI at `approved_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointForecast {
    pub approved_time: DateTime<Utc>,
    pub reference_time: DateTime<Utc>,
    pub geometry: Geometry,
    /// One entry per forecast step, in the order SMHI sent them.
    pub time_series: Vec<Forecast>,
}

/// All known parameters for one forecast step.
///
/// Parameters missing from the response keep their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub timestamp: DateTime<Utc>,
    /// hPa
    pub air_pressure: f64,
    /// °C
    pub air_temperature: f64,
    /// km
    pub horizontal_visibility: f64,
    /// Degrees
    pub wind_direction: u8,
    /// m/s
    pub wind_speed: f64,
    /// Percent
    pub relative_humidity: u8,
    /// Percent
    pub thunder_probability: u8,
    /// Octas (0-8)
    pub mean_total_cloud_cover: u8,
    pub mean_low_level_cloud_cover: u8,
    pub mean_medium_level_cloud_cover: u8,
    pub mean_high_level_cloud_cover: u8,
    /// m/s
    pub wind_gust_speed: f64,
    /// mm/h
    pub minimum_precipitation_intensity: f64,
    pub maximum_precipitation_intensity: f64,
    pub mean_precipitation_intensity: f64,
    pub median_precipitation_intensity: f64,
    /// Percent, -9 when there is no precipitation
    pub percent_of_precipitation_in_frozen_form: i8,
    pub precipitation_category: PrecipitationCategory,
    pub precipitation_category_description: Descriptions,
    pub weather_symbol: WeatherSymbol,
    pub weather_symbol_description: Descriptions,
}

impl Forecast {
    /// Creates an empty step at `timestamp`.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_step_has_zero_values() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T11:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let f = Forecast::at(ts);

        assert_eq!(f.timestamp, ts);
        assert_eq!(f.air_temperature, 0.0);
        assert_eq!(f.relative_humidity, 0);
        assert_eq!(f.weather_symbol, WeatherSymbol(0));
        assert!(f.weather_symbol_description.is_empty());
        assert!(f.precipitation_category_description.is_empty());
    }

    #[test]
    fn geometry_serializes_type_tag() {
        let g = Geometry {
            kind: "Point".into(),
            coordinates: vec![[16.158549, 58.577635]],
        };
        let json = serde_json::to_value(&g).unwrap();

        assert_eq!(json["type"], "Point");
        assert_eq!(json["coordinates"][0][1], 58.577635);
    }

    #[test]
    fn coordinates_display() {
        assert_eq!(
            Coordinates::new(18.0686, 59.3293).to_string(),
            "lon 18.068600, lat 59.329300"
        );
    }
}
