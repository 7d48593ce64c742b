//! Turns the generic SMHI time series into [`PointForecast`] records.

use chrono::{DateTime, Utc};

use crate::{
    codes::{PrecipitationCategory, WeatherSymbol},
    error::ForecastError,
    model::{Forecast, Geometry, PointForecast},
    wire::{self, RawForecastResponse, RawGeometry, RawTimeSeriesEntry},
};

type Setter = fn(&mut Forecast, f64);

/// Parameter code -> field assignment. Codes not listed here are ignored.
static PARAMETER_SETTERS: &[(&str, Setter)] = &[
    ("msl", |f: &mut Forecast, v: f64| f.air_pressure = v),
    ("t", |f: &mut Forecast, v: f64| f.air_temperature = v),
    ("vis", |f: &mut Forecast, v: f64| f.horizontal_visibility = v),
    ("wd", |f: &mut Forecast, v: f64| f.wind_direction = narrow_u8(v)),
    ("ws", |f: &mut Forecast, v: f64| f.wind_speed = v),
    ("r", |f: &mut Forecast, v: f64| f.relative_humidity = narrow_u8(v)),
    ("tstm", |f: &mut Forecast, v: f64| f.thunder_probability = narrow_u8(v)),
    ("tcc_mean", |f: &mut Forecast, v: f64| f.mean_total_cloud_cover = narrow_u8(v)),
    ("lcc_mean", |f: &mut Forecast, v: f64| f.mean_low_level_cloud_cover = narrow_u8(v)),
    ("mcc_mean", |f: &mut Forecast, v: f64| f.mean_medium_level_cloud_cover = narrow_u8(v)),
    ("hcc_mean", |f: &mut Forecast, v: f64| f.mean_high_level_cloud_cover = narrow_u8(v)),
    ("gust", |f: &mut Forecast, v: f64| f.wind_gust_speed = v),
    ("pmin", |f: &mut Forecast, v: f64| f.minimum_precipitation_intensity = v),
    ("pmax", |f: &mut Forecast, v: f64| f.maximum_precipitation_intensity = v),
    ("pmean", |f: &mut Forecast, v: f64| f.mean_precipitation_intensity = v),
    ("pmedian", |f: &mut Forecast, v: f64| f.median_precipitation_intensity = v),
    ("spp", |f: &mut Forecast, v: f64| f.percent_of_precipitation_in_frozen_form = narrow_i8(v)),
    ("pcat", |f: &mut Forecast, v: f64| {
        f.precipitation_category = PrecipitationCategory(narrow_u8(v));
        f.precipitation_category_description = f.precipitation_category.descriptions();
    }),
    ("Wsymb2", |f: &mut Forecast, v: f64| {
        f.weather_symbol = WeatherSymbol(narrow_u8(v));
        f.weather_symbol_description = f.weather_symbol.descriptions();
    }),
];

fn setter_for(code: &str) -> Option<Setter> {
    PARAMETER_SETTERS
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, setter)| *setter)
}

/// Truncates toward zero, then wraps modulo 256. No rounding, no range check.
fn narrow_u8(v: f64) -> u8 {
    v as i64 as u8
}

/// Signed counterpart of [`narrow_u8`].
fn narrow_i8(v: f64) -> i8 {
    v as i64 as i8
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ForecastError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ForecastError::Timestamp {
            field,
            value: value.to_string(),
            source,
        })
}

impl Forecast {
    /// Stores `value` in the field for parameter `code`.
    ///
    /// Returns `false` when the code is unknown and nothing was changed.
    pub fn apply(&mut self, code: &str, value: f64) -> bool {
        match setter_for(code) {
            Some(set) => {
                set(self, value);
                true
            }
            None => false,
        }
    }
}

impl From<&RawGeometry> for Geometry {
    fn from(raw: &RawGeometry) -> Self {
        Geometry {
            kind: raw.kind.clone(),
            coordinates: raw.coordinates.clone(),
        }
    }
}

fn to_forecast(entry: &RawTimeSeriesEntry) -> Result<Forecast, ForecastError> {
    let mut forecast = Forecast::at(parse_timestamp("validTime", &entry.valid_time)?);

    for param in &entry.parameters {
        let Some(value) = param.first_value() else {
            tracing::trace!(code = %param.name, "parameter without values skipped");
            continue;
        };
        if !forecast.apply(&param.name, value) {
            tracing::trace!(code = %param.name, "unknown parameter code ignored");
        }
    }

    Ok(forecast)
}

/// Maps a decoded response into the domain model.
///
/// Any unparsable timestamp fails the whole mapping.
pub fn to_point_forecast(raw: &RawForecastResponse) -> Result<PointForecast, ForecastError> {
    let approved_time = parse_timestamp("approvedTime", &raw.approved_time)?;
    let reference_time = parse_timestamp("referenceTime", &raw.reference_time)?;

    let time_series = raw
        .time_series
        .iter()
        .map(to_forecast)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(steps = time_series.len(), %approved_time, "mapped point forecast");

    Ok(PointForecast {
        approved_time,
        reference_time,
        geometry: Geometry::from(&raw.geometry),
        time_series,
    })
}

impl PointForecast {
    /// Decodes a raw SMHI response body and maps it in one go.
    pub fn decode_and_map(bytes: &[u8]) -> Result<Self, ForecastError> {
        to_point_forecast(&wire::decode(bytes)?)
    }
}
