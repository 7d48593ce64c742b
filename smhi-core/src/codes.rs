use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Locale code -> human-readable description.
pub type Descriptions = BTreeMap<String, String>;

/// The two locales SMHI descriptions are available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    SvSe,
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::SvSe => "sv-SE",
            Locale::EnUs => "en-US",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::SvSe, Locale::EnUs]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sv-se" | "sv" => Ok(Locale::SvSe),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(anyhow!("Unknown locale '{value}'. Supported locales: sv-SE, en-US.")),
        }
    }
}

/// Swedish and English text for one code, in that order.
type Texts = (&'static str, &'static str);

const PRECIPITATION_CATEGORIES: [Texts; 7] = [
    ("Ingen nederbörd", "No precipitation"),
    ("Snö", "Snow"),
    ("Snö och regn", "Snow and rain"),
    ("Regn", "Rain"),
    ("Duggregn", "Drizzle"),
    ("Frysande regn", "Freezing rain"),
    ("Underkylt regn", "Freezing drizzle"),
];

// Index is symbol code - 1.
const WEATHER_SYMBOLS: [Texts; 27] = [
    ("Klar himmel", "Clear sky"),
    ("Nästan klar himmel", "Nearly clear sky"),
    ("Växlande molnighet", "Variable cloudiness"),
    ("Halvklar himmel", "Halfclear sky"),
    ("Molnig himmel", "Cloudy sky"),
    ("Mulet", "Overcast"),
    ("Dimma", "Fog"),
    ("Lätta regnskurar", "Light rain showers"),
    ("Måttliga regnskurar", "Moderate rain showers"),
    ("Kraftiga regnskurar", "Heavy rain showers"),
    ("Åskoväder", "Thunderstorm"),
    ("Lätta regnskurar", "Light sleet showers"),
    ("Måttliga regnskurar", "Moderate sleet showers"),
    ("Kraftiga regnskurar", "Heavy sleet showers"),
    ("Lätta snöbyar", "Light snow showers"),
    ("Måttliga snöbyar", "Moderate snow showers"),
    ("Kraftiga snöbyar", "Heavy snow showers"),
    ("Duggregn", "Light rain"),
    ("Måttligt regn", "Moderate rain"),
    ("Kraftigt regn", "Heavy rain"),
    ("Åska", "Thunder"),
    ("Lätt snöblandat regn", "Light sleet"),
    ("Måttligt snöblandat regn", "Moderate sleet"),
    ("Kraftigt snöblandat regn", "Heavy sleet"),
    ("Lätt snöfall", "Light snowfall"),
    ("Måttligt snöfall", "Moderate snowfall"),
    ("Kraftigt snöfall", "Heavy snowfall"),
];

fn pick(texts: &Texts, locale: Locale) -> &'static str {
    match locale {
        Locale::SvSe => texts.0,
        Locale::EnUs => texts.1,
    }
}

fn to_descriptions(texts: Option<&Texts>) -> Descriptions {
    texts
        .map(|t| {
            Locale::all()
                .iter()
                .map(|l| (l.as_str().to_string(), pick(t, *l).to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// SMHI `pcat` code (0-6).
///
/// Codes outside the documented range are kept as-is and simply have no
/// description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecipitationCategory(pub u8);

impl PrecipitationCategory {
    pub const NO_PRECIPITATION: Self = Self(0);
    pub const SNOW: Self = Self(1);
    pub const SNOW_AND_RAIN: Self = Self(2);
    pub const RAIN: Self = Self(3);
    pub const DRIZZLE: Self = Self(4);
    pub const FREEZING_RAIN: Self = Self(5);
    pub const FREEZING_DRIZZLE: Self = Self(6);

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.texts().is_some()
    }

    pub fn describe(self, locale: Locale) -> Option<&'static str> {
        self.texts().map(|t| pick(t, locale))
    }

    /// Descriptions keyed by locale code, empty for unknown codes.
    pub fn descriptions(self) -> Descriptions {
        to_descriptions(self.texts())
    }

    fn texts(self) -> Option<&'static Texts> {
        PRECIPITATION_CATEGORIES.get(usize::from(self.0))
    }
}

/// SMHI `Wsymb2` code (1-27).
///
/// Like [`PrecipitationCategory`], out-of-range codes are not rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSymbol(pub u8);

impl WeatherSymbol {
    pub const CLEAR_SKY: Self = Self(1);
    pub const NEARLY_CLEAR_SKY: Self = Self(2);
    pub const VARIABLE_CLOUDINESS: Self = Self(3);
    pub const HALFCLEAR_SKY: Self = Self(4);
    pub const CLOUDY_SKY: Self = Self(5);
    pub const OVERCAST: Self = Self(6);
    pub const FOG: Self = Self(7);
    pub const LIGHT_RAIN_SHOWERS: Self = Self(8);
    pub const MODERATE_RAIN_SHOWERS: Self = Self(9);
    pub const HEAVY_RAIN_SHOWERS: Self = Self(10);
    pub const THUNDERSTORM: Self = Self(11);
    pub const LIGHT_SLEET_SHOWERS: Self = Self(12);
    pub const MODERATE_SLEET_SHOWERS: Self = Self(13);
    pub const HEAVY_SLEET_SHOWERS: Self = Self(14);
    pub const LIGHT_SNOW_SHOWERS: Self = Self(15);
    pub const MODERATE_SNOW_SHOWERS: Self = Self(16);
    pub const HEAVY_SNOW_SHOWERS: Self = Self(17);
    pub const LIGHT_RAIN: Self = Self(18);
    pub const MODERATE_RAIN: Self = Self(19);
    pub const HEAVY_RAIN: Self = Self(20);
    pub const THUNDER: Self = Self(21);
    pub const LIGHT_SLEET: Self = Self(22);
    pub const MODERATE_SLEET: Self = Self(23);
    pub const HEAVY_SLEET: Self = Self(24);
    pub const LIGHT_SNOWFALL: Self = Self(25);
    pub const MODERATE_SNOWFALL: Self = Self(26);
    pub const HEAVY_SNOWFALL: Self = Self(27);

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.texts().is_some()
    }

    pub fn describe(self, locale: Locale) -> Option<&'static str> {
        self.texts().map(|t| pick(t, locale))
    }

    /// Descriptions keyed by locale code, empty for unknown codes.
    pub fn descriptions(self) -> Descriptions {
        to_descriptions(self.texts())
    }

    fn texts(self) -> Option<&'static Texts> {
        let index = usize::from(self.0).checked_sub(1)?;
        WEATHER_SYMBOLS.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(sv: &str, en: &str) -> Descriptions {
        Descriptions::from([
            ("sv-SE".to_string(), sv.to_string()),
            ("en-US".to_string(), en.to_string()),
        ])
    }

    #[test]
    fn locale_as_str_roundtrip() {
        for locale in Locale::all() {
            let parsed: Locale = locale.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*locale, parsed);
        }
    }

    #[test]
    fn unknown_locale_error() {
        let err = "fi-FI".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("Unknown locale"));
    }

    #[test]
    fn weather_symbol_table_ends() {
        assert_eq!(WeatherSymbol::CLEAR_SKY.descriptions(), pair("Klar himmel", "Clear sky"));
        assert_eq!(
            WeatherSymbol::HEAVY_SNOWFALL.descriptions(),
            pair("Kraftigt snöfall", "Heavy snowfall")
        );
        assert_eq!(WeatherSymbol(11).describe(Locale::SvSe), Some("Åskoväder"));
    }

    #[test]
    fn precipitation_category_table() {
        assert_eq!(
            PrecipitationCategory::NO_PRECIPITATION.descriptions(),
            pair("Ingen nederbörd", "No precipitation")
        );
        assert_eq!(
            PrecipitationCategory::FREEZING_DRIZZLE.describe(Locale::EnUs),
            Some("Freezing drizzle")
        );
    }

    #[test]
    fn unknown_codes_have_no_description() {
        assert!(WeatherSymbol(0).descriptions().is_empty());
        assert!(WeatherSymbol(28).descriptions().is_empty());
        assert!(!WeatherSymbol(200).is_known());
        assert!(PrecipitationCategory(7).descriptions().is_empty());
        assert_eq!(PrecipitationCategory(9).describe(Locale::SvSe), None);
    }

    #[test]
    fn every_known_code_has_both_locales() {
        for code in 1..=27 {
            assert_eq!(WeatherSymbol(code).descriptions().len(), 2, "Wsymb2 {code}");
        }
        for code in 0..=6 {
            assert_eq!(PrecipitationCategory(code).descriptions().len(), 2, "pcat {code}");
        }
    }
}
