//! Shared utilities
//!
//! - Sampling: bounded draws and one-decimal rounding
//! - Normalization: SPM → AQI piecewise interpolation and air quality rating

pub mod sampling;
pub mod normalization;

// Re-export commonly used types
pub use sampling::{chance, random_in_range, round1, Range};
pub use normalization::{air_quality_assessment, aqi_from_spm, piecewise_linear, AirQuality};
