//! Climate and air-quality prediction
//!
//! - `season`: month → season for a hemisphere
//! - `patterns`: location text → climate pattern bucket and its ranges
//! - `derived`: feels-like, UV, visibility and pressure formulas
//! - `predictor`: the correlated sampling chain

pub mod season;
pub mod patterns;
pub mod derived;
pub mod predictor;

pub use season::{Hemisphere, Season};
pub use patterns::{ClimatePattern, PatternParams};
pub use predictor::{predict_environmental_data, ClimatePredictor, EnvironmentalPrediction};
