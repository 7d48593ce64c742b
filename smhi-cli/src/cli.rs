use anyhow::{Context, Result, bail, ensure};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use inquire::CustomType;
use smhi_core::{Config, Coordinates, Forecast, Locale, PointForecast, provider::provider_from_config};

const DEFAULT_TIMEZONE: &str = "Europe/Stockholm";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "smhi", version, about = "SMHI point forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a default location and display preferences.
    Configure {
        /// Longitude in decimal degrees; prompted for when absent.
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Latitude in decimal degrees; prompted for when absent.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// "sv-SE" or "en-US".
        #[arg(long)]
        locale: Option<String>,

        /// IANA time zone, e.g. "Europe/Stockholm".
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Show the point forecast for a location.
    Forecast {
        /// Longitude; falls back to the configured default location.
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Latitude; falls back to the configured default location.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Language for descriptions, "sv-SE" or "en-US".
        #[arg(long)]
        locale: Option<String>,

        /// Time zone timestamps are printed in.
        #[arg(long)]
        timezone: Option<String>,

        /// Print the whole forecast as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure {
                lon,
                lat,
                locale,
                timezone,
            } => configure(lon, lat, locale, timezone),
            Command::Forecast {
                lon,
                lat,
                locale,
                timezone,
                json,
            } => forecast(lon, lat, locale, timezone, json).await,
        }
    }
}

fn configure(
    lon: Option<f64>,
    lat: Option<f64>,
    locale: Option<String>,
    timezone: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;
    let current = config.default_location;

    let lon = match lon {
        Some(v) => v,
        None => prompt_degrees("Longitude:", current.map(|c| c.lon))?,
    };
    let lat = match lat {
        Some(v) => v,
        None => prompt_degrees("Latitude:", current.map(|c| c.lat))?,
    };
    let location = validate_location(lon, lat)?;
    config.set_default_location(location);

    if let Some(locale) = locale {
        let locale: Locale = locale.parse()?;
        config.locale = Some(locale.to_string());
    }
    if let Some(timezone) = timezone {
        parse_timezone(&timezone)?;
        config.timezone = Some(timezone);
    }

    config.save()?;
    println!(
        "Saved default location {location} to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

fn prompt_degrees(message: &str, default: Option<f64>) -> Result<f64> {
    let mut prompt = CustomType::<f64>::new(message)
        .with_error_message("Please type a number in decimal degrees");
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }

    prompt.prompt().context("Failed to read coordinate")
}

async fn forecast(
    lon: Option<f64>,
    lat: Option<f64>,
    locale: Option<String>,
    timezone: Option<String>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let location = resolve_location(lon, lat, &config)?;

    let provider = provider_from_config(&config)?;
    tracing::info!(%location, "fetching forecast");
    let forecast = provider
        .point_forecast(location)
        .await
        .with_context(|| format!("Failed to fetch forecast for {location}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    let locale = match locale {
        Some(s) => s.parse()?,
        None => config.locale()?,
    };
    let tz = parse_timezone(
        timezone
            .as_deref()
            .or(config.timezone.as_deref())
            .unwrap_or(DEFAULT_TIMEZONE),
    )?;

    for line in render(&forecast, locale, tz) {
        println!("{line}");
    }

    Ok(())
}

fn resolve_location(lon: Option<f64>, lat: Option<f64>, config: &Config) -> Result<Coordinates> {
    match (lon, lat) {
        (Some(lon), Some(lat)) => validate_location(lon, lat),
        (None, None) => config.default_location(),
        _ => bail!("Both --lon and --lat must be given, or neither."),
    }
}

fn validate_location(lon: f64, lat: f64) -> Result<Coordinates> {
    ensure!(
        (-180.0..=180.0).contains(&lon),
        "Longitude {lon} is outside -180..180"
    );
    ensure!(
        (-90.0..=90.0).contains(&lat),
        "Latitude {lat} is outside -90..90"
    );
    Ok(Coordinates::new(lon, lat))
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("Unknown time zone '{name}': {e}"))
}

fn render(forecast: &PointForecast, locale: Locale, tz: Tz) -> Vec<String> {
    forecast
        .time_series
        .iter()
        .map(|f| render_step(f, locale, tz))
        .collect()
}

fn render_step(step: &Forecast, locale: Locale, tz: Tz) -> String {
    format!(
        "{} {:<28} {:>5.1} C",
        step.timestamp.with_timezone(&tz).format("%Y-%m-%d %H:%M"),
        step.weather_symbol.describe(locale).unwrap_or("-"),
        step.air_temperature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use smhi_core::WeatherSymbol;

    fn step(ts: &str, symbol: u8, temp: f64) -> Forecast {
        let mut f = Forecast::at(DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc));
        f.apply("Wsymb2", f64::from(symbol));
        f.air_temperature = temp;
        f
    }

    #[test]
    fn renders_in_local_time_and_locale() {
        let f = step("2024-07-01T10:00:00Z", 1, 21.5);
        let tz = parse_timezone("Europe/Stockholm").unwrap();

        let sv = render_step(&f, Locale::SvSe, tz);
        assert!(sv.starts_with("2024-07-01 12:00 Klar himmel"));
        assert!(sv.ends_with(" 21.5 C"));

        let en = render_step(&f, Locale::EnUs, tz);
        assert!(en.contains("Clear sky"));
    }

    #[test]
    fn unknown_symbol_renders_dash() {
        let f = step("2024-01-01T00:00:00Z", 0, -4.0);
        assert_eq!(f.weather_symbol, WeatherSymbol(0));

        let line = render_step(&f, Locale::EnUs, Tz::UTC);
        assert!(line.starts_with("2024-01-01 00:00 - "));
        assert!(line.ends_with(" -4.0 C"));
    }

    #[test]
    fn location_from_args_or_config() {
        let mut cfg = Config::default();
        assert!(resolve_location(None, None, &cfg).is_err());

        cfg.set_default_location(Coordinates::new(11.97, 57.71));
        assert_eq!(
            resolve_location(None, None, &cfg).unwrap(),
            Coordinates::new(11.97, 57.71)
        );
        assert_eq!(
            resolve_location(Some(18.07), Some(59.33), &cfg).unwrap(),
            Coordinates::new(18.07, 59.33)
        );

        let err = resolve_location(Some(18.07), None, &cfg).unwrap_err();
        assert!(err.to_string().contains("Both --lon and --lat"));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_location(181.0, 0.0).is_err());
        assert!(validate_location(0.0, -91.0).is_err());
        assert!(validate_location(-3.7, 40.4).is_ok());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Unknown time zone"));
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["smhi", "forecast", "--lon", "-3.7", "--lat", "40.4"]).unwrap();
        match cli.command {
            Command::Forecast { lon, lat, json, .. } => {
                assert_eq!(lon, Some(-3.7));
                assert_eq!(lat, Some(40.4));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
