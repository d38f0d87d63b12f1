//! Normalization Utilities
//!
//! Converts raw suspended particulate matter (SPM, µg/m³) to an air quality
//! index using piecewise-linear interpolation between fixed breakpoints, and
//! rates it on a three-step scale.

use serde::{Deserialize, Serialize};

/// Upper bound of the reported index
pub const AQI_MAX: f64 = 500.0;

/// Highest SPM (µg/m³) still rated excellent
pub const EXCELLENT_SPM_MAX: f64 = 50.0;
/// Highest SPM (µg/m³) still rated moderate
pub const MODERATE_SPM_MAX: f64 = 100.0;

/// (SPM, AQI) breakpoints, ascending in SPM
const AQI_BREAKPOINTS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (50.0, 50.0),
    (100.0, 75.0),
    (250.0, 150.0),
    (350.0, 200.0),
    (430.0, 300.0),
];

/// Piecewise-linear interpolation over ascending `(x, y)` breakpoints
///
/// Algorithm:
/// 1. Find bracketing breakpoints [xi, xi+1] where xi <= raw <= xi+1
/// 2. Linear interpolation: y = yi + fraction × (yi+1 - yi)
///
/// Values below the first breakpoint clamp to its `y`. Values above the
/// last breakpoint return `None` so callers choose how to extrapolate.
pub fn piecewise_linear(raw_value: f64, breakpoints: &[(f64, f64)]) -> Option<f64> {
    let (first_x, first_y) = *breakpoints.first()?;
    if raw_value <= first_x {
        return Some(first_y);
    }

    for pair in breakpoints.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x0 <= raw_value && raw_value <= x1 {
            let fraction = if x1 - x0 > 0.0 {
                (raw_value - x0) / (x1 - x0)
            } else {
                0.0
            };
            return Some(y0 + fraction * (y1 - y0));
        }
    }

    None
}

/// Air quality index for an SPM concentration
///
/// Beyond the last breakpoint the index grows one point per µg/m³ and is
/// capped at [`AQI_MAX`]. NaN and negative inputs map to 0.
pub fn aqi_from_spm(spm: f64) -> f64 {
    if spm.is_nan() {
        return 0.0;
    }

    match piecewise_linear(spm, &AQI_BREAKPOINTS) {
        Some(aqi) => aqi,
        None => {
            let (last_spm, last_aqi) = AQI_BREAKPOINTS[AQI_BREAKPOINTS.len() - 1];
            (last_aqi + (spm - last_spm)).min(AQI_MAX)
        }
    }
}

/// Three-step air quality rating derived from SPM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQuality {
    Excellent,
    Moderate,
    Poor,
}

impl AirQuality {
    pub fn display_name(&self) -> &'static str {
        match self {
            AirQuality::Excellent => "Excellent",
            AirQuality::Moderate => "Moderate",
            AirQuality::Poor => "Poor",
        }
    }

    /// Outdoor activity guidance
    pub fn advice(&self) -> &'static str {
        match self {
            AirQuality::Excellent => "Safe for all outdoor activities.",
            AirQuality::Moderate => "Sensitive individuals should limit prolonged outdoor exertion.",
            AirQuality::Poor => "Everyone should reduce outdoor activities.",
        }
    }
}

/// Rate an SPM concentration: ≤ 50 excellent, ≤ 100 moderate, otherwise poor
///
/// NaN rates excellent, in line with [`aqi_from_spm`] mapping it to 0.
pub fn air_quality_assessment(spm: f64) -> AirQuality {
    if spm.is_nan() || spm <= EXCELLENT_SPM_MAX {
        AirQuality::Excellent
    } else if spm <= MODERATE_SPM_MAX {
        AirQuality::Moderate
    } else {
        AirQuality::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aqi_reference_points() {
        assert_relative_eq!(aqi_from_spm(40.0), 40.0, epsilon = 0.0001);
        assert_relative_eq!(aqi_from_spm(75.0), 62.5, epsilon = 0.0001);
        assert_relative_eq!(aqi_from_spm(125.0), 87.5, epsilon = 0.0001);
    }

    #[test]
    fn test_aqi_breakpoints_are_continuous() {
        for &(spm, aqi) in AQI_BREAKPOINTS.iter() {
            assert_relative_eq!(aqi_from_spm(spm), aqi, epsilon = 0.0001);
        }
    }

    #[test]
    fn test_aqi_edges() {
        assert_eq!(aqi_from_spm(-5.0), 0.0);
        assert_eq!(aqi_from_spm(f64::NAN), 0.0);
        assert_relative_eq!(aqi_from_spm(480.0), 350.0, epsilon = 0.0001);
        assert_eq!(aqi_from_spm(5000.0), AQI_MAX);
    }

    #[test]
    fn test_aqi_is_monotonic() {
        let mut previous = aqi_from_spm(0.0);
        for step in 1..=1200 {
            let current = aqi_from_spm(step as f64 * 0.5);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_piecewise_linear_empty() {
        assert_eq!(piecewise_linear(1.0, &[]), None);
    }

    #[test]
    fn test_air_quality_thresholds() {
        assert_eq!(air_quality_assessment(0.0), AirQuality::Excellent);
        assert_eq!(air_quality_assessment(50.0), AirQuality::Excellent);
        assert_eq!(air_quality_assessment(50.1), AirQuality::Moderate);
        assert_eq!(air_quality_assessment(100.0), AirQuality::Moderate);
        assert_eq!(air_quality_assessment(100.1), AirQuality::Poor);
        assert_eq!(air_quality_assessment(420.0), AirQuality::Poor);
        assert_eq!(air_quality_assessment(f64::NAN), AirQuality::Excellent);
    }

    #[test]
    fn test_air_quality_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AirQuality::Moderate).unwrap(), "\"moderate\"");
        assert!(AirQuality::Poor.advice().starts_with("Everyone"));
    }
}
