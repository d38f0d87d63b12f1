//! Climate Pattern Buckets
//!
//! Coarse regional climate groupings selected by matching known city and
//! region names inside a free-text location. Each bucket carries the
//! parameter ranges the predictor samples from.

use serde::{Deserialize, Serialize};

use super::season::Season;
use crate::utils::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimatePattern {
    /// Hot and humid year-round, monsoon summers
    Tropical,
    /// Hot, dry, dusty
    Desert,
    /// Long freezing winters
    Cold,
    /// Mild maritime/continental Europe
    TemperateEuropean,
    /// US coastal cities
    UsCoastal,
    /// Anything unrecognised
    Default,
}

/// Sampling parameters for one climate pattern
#[derive(Debug, Clone, Copy)]
pub struct PatternParams {
    /// Temperature (°C) per season, indexed by [`season_index`]
    pub temperature: [Range; 4],
    /// Relative humidity (%) before seasonal shift
    pub humidity: Range,
    /// Added to both humidity bounds per season
    pub humidity_shift: [f64; 4],
    /// Base probability of rain per season at 100% humidity
    pub rain_chance: [f64; 4],
    /// Rainfall (mm) on a rainy day at 100% humidity
    pub rainfall: Range,
    /// Wind speed (km/h)
    pub wind: Range,
    /// Suspended particulate matter (µg/m³)
    pub spm: Range,
}

impl PatternParams {
    /// Humidity range for a season, clipped to [0, 100]
    pub fn humidity_for(&self, season: Season) -> Range {
        let shifted = self.humidity.shifted(self.humidity_shift[season_index(season)]);
        Range::new(shifted.min.max(0.0), shifted.max.min(100.0))
    }

    pub fn temperature_for(&self, season: Season) -> Range {
        self.temperature[season_index(season)]
    }

    pub fn rain_chance_for(&self, season: Season) -> f64 {
        self.rain_chance[season_index(season)]
    }
}

/// `needle` occurs in `haystack` with no letter or digit directly on either side
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Table index for a season (winter, spring, summer, autumn)
pub fn season_index(season: Season) -> usize {
    match season {
        Season::Winter => 0,
        Season::Spring => 1,
        Season::Summer => 2,
        Season::Autumn => 3,
    }
}

// ============================================================================
// LOCATION KEYWORDS
// Matched as lowercase whole words, in ClimatePattern::MATCH_ORDER
// ============================================================================

static TROPICAL_KEYWORDS: &[&str] = &[
    "mumbai", "chennai", "kolkata", "kerala", "goa", "bangkok", "singapore",
    "jakarta", "manila", "kuala lumpur", "ho chi minh", "colombo", "dhaka",
    "lagos", "rio de janeiro", "miami", "honolulu",
];

static DESERT_KEYWORDS: &[&str] = &[
    "dubai", "abu dhabi", "riyadh", "doha", "kuwait", "cairo", "jaipur",
    "rajasthan", "jaisalmer", "phoenix", "las vegas", "sahara", "muscat",
];

static COLD_KEYWORDS: &[&str] = &[
    "moscow", "oslo", "helsinki", "stockholm", "reykjavik", "anchorage",
    "montreal", "winnipeg", "siberia", "shimla", "ladakh", "leh",
];

static TEMPERATE_EUROPEAN_KEYWORDS: &[&str] = &[
    "london", "paris", "berlin", "amsterdam", "brussels", "dublin", "vienna",
    "zurich", "prague", "munich", "copenhagen", "edinburgh", "rome", "madrid",
];

static US_COASTAL_KEYWORDS: &[&str] = &[
    "new york", "boston", "washington", "san francisco", "los angeles",
    "san diego", "seattle", "portland", "charleston",
];

// ============================================================================
// PARAMETER TABLES
// ============================================================================

static TROPICAL: PatternParams = PatternParams {
    temperature: [
        Range::new(22.0, 30.0),
        Range::new(26.0, 35.0),
        Range::new(25.0, 32.0),
        Range::new(24.0, 32.0),
    ],
    humidity: Range::new(65.0, 90.0),
    humidity_shift: [-5.0, 0.0, 5.0, 0.0],
    rain_chance: [0.2, 0.4, 0.9, 0.6],
    rainfall: Range::new(5.0, 80.0),
    wind: Range::new(5.0, 25.0),
    spm: Range::new(40.0, 140.0),
};

static DESERT: PatternParams = PatternParams {
    temperature: [
        Range::new(12.0, 24.0),
        Range::new(22.0, 36.0),
        Range::new(32.0, 46.0),
        Range::new(22.0, 36.0),
    ],
    humidity: Range::new(10.0, 40.0),
    humidity_shift: [5.0, 0.0, -5.0, 0.0],
    rain_chance: [0.1, 0.05, 0.02, 0.05],
    rainfall: Range::new(0.5, 10.0),
    wind: Range::new(10.0, 40.0),
    spm: Range::new(80.0, 250.0),
};

static COLD: PatternParams = PatternParams {
    temperature: [
        Range::new(-20.0, -2.0),
        Range::new(-2.0, 12.0),
        Range::new(12.0, 25.0),
        Range::new(0.0, 12.0),
    ],
    humidity: Range::new(55.0, 90.0),
    humidity_shift: [0.0, 0.0, -5.0, 5.0],
    rain_chance: [0.5, 0.5, 0.6, 0.6],
    rainfall: Range::new(1.0, 20.0),
    wind: Range::new(10.0, 40.0),
    spm: Range::new(10.0, 60.0),
};

static TEMPERATE_EUROPEAN: PatternParams = PatternParams {
    temperature: [
        Range::new(-2.0, 8.0),
        Range::new(6.0, 17.0),
        Range::new(15.0, 28.0),
        Range::new(6.0, 16.0),
    ],
    humidity: Range::new(55.0, 90.0),
    humidity_shift: [5.0, 0.0, -5.0, 5.0],
    rain_chance: [0.6, 0.5, 0.4, 0.6],
    rainfall: Range::new(1.0, 25.0),
    wind: Range::new(8.0, 35.0),
    spm: Range::new(15.0, 70.0),
};

static US_COASTAL: PatternParams = PatternParams {
    temperature: [
        Range::new(2.0, 14.0),
        Range::new(10.0, 20.0),
        Range::new(18.0, 30.0),
        Range::new(10.0, 22.0),
    ],
    humidity: Range::new(50.0, 85.0),
    humidity_shift: [0.0, 0.0, 5.0, 0.0],
    rain_chance: [0.5, 0.45, 0.3, 0.45],
    rainfall: Range::new(1.0, 30.0),
    wind: Range::new(10.0, 40.0),
    spm: Range::new(15.0, 80.0),
};

static DEFAULT: PatternParams = PatternParams {
    temperature: [
        Range::new(8.0, 22.0),
        Range::new(18.0, 32.0),
        Range::new(25.0, 38.0),
        Range::new(16.0, 30.0),
    ],
    humidity: Range::new(40.0, 95.0),
    humidity_shift: [-5.0, 0.0, 0.0, 0.0],
    rain_chance: [0.2, 0.3, 0.7, 0.4],
    rainfall: Range::new(1.0, 50.0),
    wind: Range::new(5.0, 45.0),
    spm: Range::new(20.0, 150.0),
};

impl ClimatePattern {
    /// Buckets tried in order; the first keyword hit wins
    const MATCH_ORDER: [ClimatePattern; 5] = [
        ClimatePattern::Tropical,
        ClimatePattern::Desert,
        ClimatePattern::Cold,
        ClimatePattern::TemperateEuropean,
        ClimatePattern::UsCoastal,
    ];

    /// Classify a free-text location
    pub fn classify(location: &str) -> Self {
        let location = location.to_lowercase();
        Self::MATCH_ORDER
            .iter()
            .copied()
            .find(|pattern| pattern.keywords().iter().any(|k| contains_word(&location, k)))
            .unwrap_or(ClimatePattern::Default)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ClimatePattern::Tropical => TROPICAL_KEYWORDS,
            ClimatePattern::Desert => DESERT_KEYWORDS,
            ClimatePattern::Cold => COLD_KEYWORDS,
            ClimatePattern::TemperateEuropean => TEMPERATE_EUROPEAN_KEYWORDS,
            ClimatePattern::UsCoastal => US_COASTAL_KEYWORDS,
            ClimatePattern::Default => &[],
        }
    }

    pub fn params(&self) -> &'static PatternParams {
        match self {
            ClimatePattern::Tropical => &TROPICAL,
            ClimatePattern::Desert => &DESERT,
            ClimatePattern::Cold => &COLD,
            ClimatePattern::TemperateEuropean => &TEMPERATE_EUROPEAN,
            ClimatePattern::UsCoastal => &US_COASTAL,
            ClimatePattern::Default => &DEFAULT,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClimatePattern::Tropical => "Tropical",
            ClimatePattern::Desert => "Desert",
            ClimatePattern::Cold => "Cold",
            ClimatePattern::TemperateEuropean => "Temperate European",
            ClimatePattern::UsCoastal => "US Coastal",
            ClimatePattern::Default => "Default",
        }
    }

    pub fn all() -> &'static [ClimatePattern] {
        &[
            ClimatePattern::Tropical,
            ClimatePattern::Desert,
            ClimatePattern::Cold,
            ClimatePattern::TemperateEuropean,
            ClimatePattern::UsCoastal,
            ClimatePattern::Default,
        ]
    }
}
