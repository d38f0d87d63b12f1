//! Derived Weather Quantities
//!
//! Pure functions of the sampled base values (temperature, humidity, wind,
//! rainfall, SPM). Anything random here is expressed as a range for the
//! predictor to draw from.

use crate::utils::Range;

/// Heat index applies at or above this temperature (°C)
pub const HEAT_INDEX_MIN_C: f64 = 27.0;
/// Wind chill applies at or below this temperature (°C)
pub const WIND_CHILL_MAX_C: f64 = 10.0;
/// Wind chill needs wind strictly above this speed (km/h)
pub const WIND_CHILL_MIN_WIND_KMH: f64 = 5.0;
/// Heat index values are clamped to this ceiling (°C)
pub const HEAT_INDEX_CEILING_C: f64 = 60.0;

pub const VISIBILITY_KM: Range = Range::new(0.5, 10.0);
pub const UV_INDEX: Range = Range::new(0.0, 11.0);

const DRY_PRESSURE_HPA: Range = Range::new(1010.0, 1025.0);
const WET_PRESSURE_HPA: Range = Range::new(995.0, 1010.0);

/// Apparent temperature (°C)
///
/// Heat index at >= 27 °C, wind chill at <= 10 °C with wind > 5 km/h,
/// otherwise the air temperature unchanged.
pub fn feels_like(temperature_c: f64, humidity_percent: f64, wind_kmh: f64) -> f64 {
    if temperature_c >= HEAT_INDEX_MIN_C {
        heat_index(temperature_c, humidity_percent)
    } else if temperature_c <= WIND_CHILL_MAX_C && wind_kmh > WIND_CHILL_MIN_WIND_KMH {
        wind_chill(temperature_c, wind_kmh)
    } else {
        temperature_c
    }
}

/// Rothfusz heat index regression, evaluated in °F and returned in °C
pub fn heat_index(temperature_c: f64, humidity_percent: f64) -> f64 {
    let t = temperature_c * 9.0 / 5.0 + 32.0;
    let rh = humidity_percent;

    let hi_f = -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh;

    ((hi_f - 32.0) * 5.0 / 9.0).min(HEAT_INDEX_CEILING_C)
}

/// Environment Canada wind chill index (°C), wind in km/h
pub fn wind_chill(temperature_c: f64, wind_kmh: f64) -> f64 {
    let v = wind_kmh.powf(0.16);
    13.12 + 0.6215 * temperature_c - 11.37 * v + 0.3965 * temperature_c * v
}

/// UV index band for an air temperature
pub fn uv_band(temperature_c: f64) -> Range {
    match temperature_c {
        t if t < 10.0 => Range::new(0.0, 3.0),
        t if t < 20.0 => Range::new(2.0, 6.0),
        t if t < 30.0 => Range::new(4.0, 8.0),
        _ => Range::new(6.0, 11.0),
    }
}

/// Multiplier applied to the UV draw: cloud cover from rain and haze
pub fn uv_dampening(rainfall_mm: f64, humidity_percent: f64) -> f64 {
    let mut factor = 1.0;
    if rainfall_mm > 0.0 {
        factor *= 0.5;
    }
    if humidity_percent > 80.0 {
        factor *= 0.8;
    }
    factor
}

/// Horizontal visibility (km), falling with humidity above 30% and with SPM
pub fn visibility_km(humidity_percent: f64, spm: f64) -> f64 {
    let humidity_loss = (humidity_percent - 30.0).max(0.0) / 140.0;
    let particle_loss = spm.clamp(0.0, 300.0) / 400.0;
    VISIBILITY_KM.clamp(VISIBILITY_KM.max * (1.0 - humidity_loss) * (1.0 - particle_loss))
}

/// Sea-level pressure range (hPa): high when dry, low when raining
pub fn pressure_range(rainfall_mm: f64) -> Range {
    if rainfall_mm > 0.0 {
        WET_PRESSURE_HPA
    } else {
        DRY_PRESSURE_HPA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_feels_like_neutral_band_is_exact() {
        for t in [10.5, 15.0, 20.0, 26.9] {
            assert_eq!(feels_like(t, 90.0, 40.0), t);
        }
        // At or below 10 °C but calm
        assert_eq!(feels_like(5.0, 50.0, 5.0), 5.0);
        assert_eq!(feels_like(-3.0, 50.0, 0.0), -3.0);
    }

    #[test]
    fn test_feels_like_uses_heat_index_from_27() {
        assert_relative_eq!(feels_like(27.0, 70.0, 30.0), heat_index(27.0, 70.0), epsilon = 1e-9);
        assert_relative_eq!(feels_like(35.0, 70.0, 30.0), 50.3, epsilon = 0.1);
    }

    #[test]
    fn test_feels_like_uses_wind_chill() {
        assert_relative_eq!(feels_like(10.0, 50.0, 5.1), wind_chill(10.0, 5.1), epsilon = 1e-9);
        assert_relative_eq!(wind_chill(0.0, 20.0), -5.24, epsilon = 0.01);
        assert!(feels_like(-10.0, 50.0, 30.0) < -10.0);
    }

    #[test]
    fn test_heat_index_is_capped() {
        assert_eq!(heat_index(45.0, 100.0), HEAT_INDEX_CEILING_C);
    }

    #[test]
    fn test_uv_band_and_dampening() {
        assert_eq!(uv_band(5.0), Range::new(0.0, 3.0));
        assert_eq!(uv_band(30.0), Range::new(6.0, 11.0));
        assert_eq!(uv_dampening(0.0, 50.0), 1.0);
        assert_relative_eq!(uv_dampening(3.0, 85.0), 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_visibility_decreases() {
        assert_eq!(visibility_km(20.0, 0.0), 10.0);
        assert!(visibility_km(90.0, 50.0) < visibility_km(60.0, 50.0));
        assert!(visibility_km(60.0, 200.0) < visibility_km(60.0, 50.0));
        assert!(VISIBILITY_KM.contains(visibility_km(100.0, 1000.0)));
    }

    #[test]
    fn test_pressure_higher_when_dry() {
        assert!(pressure_range(0.0).min >= pressure_range(12.0).max);
    }
}
