//! Environmental Simulation Library
//!
//! Simulated environmental metrics from categorical inputs:
//! - `climate/`: weather and air-quality prediction for a location and date
//! - `carbon_cycle`: emissions vs sequestration balance
//! - `indoor_plants`: CO₂ absorption and O₂ emission of house plants, plus
//!   how many plants a room needs
//! - `geocode`: best-effort coordinate → place name lookup
//!
//! Every generator takes the random source as a parameter, so a seeded
//! `StdRng` reproduces results exactly.

pub mod utils;
pub mod config;
pub mod lookup_tables;
pub mod climate;
pub mod carbon_cycle;
pub mod indoor_plants;
pub mod report;

#[cfg(feature = "geocode")]
pub mod geocode;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use utils::{air_quality_assessment, aqi_from_spm, random_in_range, AirQuality, Range};
pub use config::{PredictorConfig, ServerConfig};
pub use lookup_tables::{EmissionSource, PlantSpecies, SequestrationEffort};
pub use climate::{
    predict_environmental_data, ClimatePattern, ClimatePredictor, EnvironmentalPrediction,
    Hemisphere, Season,
};
pub use carbon_cycle::{simulate_carbon_cycle, CarbonSimulation};
pub use indoor_plants::{
    analyze_indoor_plant, recommended_plant_count, room_size_factor, PlantAnalysis, PlantCountRange,
};
pub use report::{EnvironmentalReport, ReportFormatter};

#[cfg(feature = "geocode")]
pub use geocode::{reverse_geocode, ReverseGeocoder, UNKNOWN_LOCATION};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
