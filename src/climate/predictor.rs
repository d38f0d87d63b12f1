//! Environmental Predictor
//!
//! Produces one day of simulated weather and air quality for a location.
//!
//! Generation is a single chain over the injected random source, where each
//! draw conditions the next:
//! 1. humidity
//! 2. rainfall (rain probability scales with humidity)
//! 3. temperature (cooled by rain)
//! 4. wind (gustier in heavy rain)
//! 5. SPM (washed out by rain)
//!
//! Feels-like, UV, AQI, air quality, visibility and pressure are derived
//! afterwards.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::derived::{feels_like, pressure_range, uv_band, uv_dampening, visibility_km};
use super::patterns::{ClimatePattern, PatternParams};
use super::season::Season;
use crate::config::PredictorConfig;
use crate::utils::{air_quality_assessment, aqi_from_spm, chance, random_in_range, round1, AirQuality};

/// Rainfall above this (mm) counts as heavy
pub const HEAVY_RAIN_MM: f64 = 20.0;
/// Wind multiplier in heavy rain
pub const HEAVY_RAIN_WIND_FACTOR: f64 = 1.3;
/// Largest rain cooling (°C)
pub const MAX_RAIN_COOLING_C: f64 = 5.0;
/// Largest fraction of SPM removed by rain
pub const MAX_WASHOUT_FRACTION: f64 = 0.6;

/// One day of simulated conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPrediction {
    pub location: String,
    pub date: NaiveDate,
    pub season: Season,
    pub climate_pattern: ClimatePattern,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub spm_ugm3: f64,
    pub feels_like_c: f64,
    pub uv_index: f64,
    pub aqi: f64,
    pub air_quality: AirQuality,
    pub visibility_km: f64,
    pub pressure_hpa: f64,
}

/// Configured predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct ClimatePredictor {
    config: PredictorConfig,
}

impl ClimatePredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Simulate conditions for `location` on `date`
    pub fn predict<R: Rng + ?Sized>(
        &self,
        location: &str,
        date: NaiveDate,
        rng: &mut R,
    ) -> EnvironmentalPrediction {
        let season = Season::from_date(date, self.config.hemisphere);
        let pattern = ClimatePattern::classify(location);
        let params = pattern.params();

        debug!(
            "Predicting '{}' on {}: season={:?}, pattern={:?}",
            location, date, season, pattern
        );

        let humidity = random_in_range(rng, params.humidity_for(season));
        let rainfall = sample_rainfall(rng, params, season, humidity);
        let temperature = sample_temperature(rng, params, season, rainfall);
        let wind = sample_wind(rng, params, rainfall);
        let spm = sample_spm(rng, params, rainfall);

        let uv_raw = random_in_range(rng, uv_band(temperature));
        let uv_index = round1(uv_raw * uv_dampening(rainfall, humidity));
        let pressure = random_in_range(rng, pressure_range(rainfall));

        EnvironmentalPrediction {
            location: location.to_string(),
            date,
            season,
            climate_pattern: pattern,
            rainfall_mm: rainfall,
            temperature_c: temperature,
            humidity_percent: humidity,
            wind_speed_kmh: wind,
            spm_ugm3: spm,
            feels_like_c: round1(feels_like(temperature, humidity, wind)),
            uv_index,
            aqi: round1(aqi_from_spm(spm)),
            air_quality: air_quality_assessment(spm),
            visibility_km: round1(visibility_km(humidity, spm)),
            pressure_hpa: pressure,
        }
    }
}

/// Predict with the default (northern hemisphere) configuration
pub fn predict_environmental_data<R: Rng + ?Sized>(
    location: &str,
    date: NaiveDate,
    rng: &mut R,
) -> EnvironmentalPrediction {
    ClimatePredictor::default().predict(location, date, rng)
}

/// Rain occurs with probability `rain_chance × humidity / 100`; the amount
/// is scaled between 50% (bone dry air) and 100% (saturated).
fn sample_rainfall<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PatternParams,
    season: Season,
    humidity: f64,
) -> f64 {
    let probability = params.rain_chance_for(season) * humidity / 100.0;
    if !chance(rng, probability) {
        return 0.0;
    }

    let amount = random_in_range(rng, params.rainfall) * (0.5 + humidity / 200.0);
    // Never report a rainy day as 0.0 mm
    round1(amount).max(0.1)
}

fn sample_temperature<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PatternParams,
    season: Season,
    rainfall: f64,
) -> f64 {
    let base = random_in_range(rng, params.temperature_for(season));
    round1(base - rain_cooling(rainfall))
}

fn sample_wind<R: Rng + ?Sized>(rng: &mut R, params: &PatternParams, rainfall: f64) -> f64 {
    let base = random_in_range(rng, params.wind);
    if rainfall > HEAVY_RAIN_MM {
        round1(base * HEAVY_RAIN_WIND_FACTOR)
    } else {
        base
    }
}

fn sample_spm<R: Rng + ?Sized>(rng: &mut R, params: &PatternParams, rainfall: f64) -> f64 {
    let base = random_in_range(rng, params.spm);
    round1(base * (1.0 - washout_fraction(rainfall)))
}

/// Temperature drop from rain: 10% of the rainfall, at most 5 °C
pub fn rain_cooling(rainfall_mm: f64) -> f64 {
    (rainfall_mm.max(0.0) * 0.1).min(MAX_RAIN_COOLING_C)
}

/// Fraction of particulates removed by rain
pub fn washout_fraction(rainfall_mm: f64) -> f64 {
    (rainfall_mm.max(0.0) / 50.0).min(MAX_WASHOUT_FRACTION)
}
