// Axum API Server Module
//
// Purpose: JSON endpoints over the climate, carbon and plant simulators plus
// cached reverse geocoding

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::time::Duration;

#[cfg(feature = "api")]
use chrono::NaiveDate;

#[cfg(feature = "api")]
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "api")]
use crate::carbon_cycle::simulate_carbon_cycle;

#[cfg(feature = "api")]
use crate::climate::ClimatePredictor;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::geocode::{ReverseGeocoder, UNKNOWN_LOCATION};

#[cfg(feature = "api")]
use crate::indoor_plants::{analyze_indoor_plant, REFERENCE_ROOM_SQM};

#[cfg(feature = "api")]
use crate::lookup_tables::{EmissionSource, PlantSpecies, SequestrationEffort};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub predictor: ClimatePredictor,
    pub geocoder: ReverseGeocoder,
    /// Resolved place names keyed by coordinates rounded to 3 decimals (~110 m)
    pub geocode_cache: Cache<String, String>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing reverse geocoder ({})...", config.geocode.base_url);
        let geocoder = ReverseGeocoder::new(&config.geocode)?;

        tracing::info!("Initializing Moka geocode cache...");
        let geocode_cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Ok(Self {
            predictor: ClimatePredictor::new(config.predictor),
            geocoder,
            geocode_cache,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Simulators
        .route("/api/climate/predict", get(predict_climate))
        .route("/api/carbon/simulate", get(simulate_carbon))
        .route("/api/plants/analyze", get(analyze_plant))

        // Location
        .route("/api/geocode/reverse", get(reverse_geocode))

        // Selectable categories
        .route("/api/catalog", get(get_catalog))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
#[derive(Debug, serde::Deserialize)]
struct PredictQuery {
    location: String,
    /// YYYY-MM-DD, defaults to today (UTC)
    date: Option<String>,
}

#[cfg(feature = "api")]
async fn predict_climate(
    State(state): State<AppState>,
    query: Result<Query<PredictQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = query?;
    let location = params.location.trim();
    if location.is_empty() {
        return Err(AppError::BadRequest("location must not be empty".to_string()));
    }

    let date = match params.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let mut rng = StdRng::from_entropy();
    let prediction = state.predictor.predict(location, date, &mut rng);
    tracing::debug!("Prediction for '{}' on {}: {:?}", location, date, prediction.climate_pattern);

    to_json(&prediction)
}

#[cfg(feature = "api")]
#[derive(Debug, serde::Deserialize)]
struct CarbonQuery {
    #[serde(default)]
    emission_source: String,
    #[serde(default)]
    sequestration_effort: String,
}

#[cfg(feature = "api")]
async fn simulate_carbon(
    query: Result<Query<CarbonQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = query?;
    let mut rng = StdRng::from_entropy();
    let simulation = simulate_carbon_cycle(
        &params.emission_source,
        &params.sequestration_effort,
        &mut rng,
    );
    to_json(&simulation)
}

#[cfg(feature = "api")]
#[derive(Debug, serde::Deserialize)]
struct PlantQuery {
    #[serde(default)]
    plant: String,
    room_size: Option<f64>,
}

#[cfg(feature = "api")]
async fn analyze_plant(
    query: Result<Query<PlantQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = query?;
    let room_size = params.room_size.unwrap_or(REFERENCE_ROOM_SQM);
    if !room_size.is_finite() || room_size < 0.0 {
        return Err(AppError::BadRequest(format!(
            "room_size must be a non-negative number, got {}",
            room_size
        )));
    }

    let mut rng = StdRng::from_entropy();
    let analysis = analyze_indoor_plant(&params.plant, room_size, &mut rng);
    to_json(&analysis)
}

#[cfg(feature = "api")]
#[derive(Debug, serde::Deserialize)]
struct GeocodeQuery {
    lat: f64,
    lon: f64,
}

/// Reverse geocode; failures answer 200 with the sentinel name
#[cfg(feature = "api")]
async fn reverse_geocode(
    State(state): State<AppState>,
    query: Result<Query<GeocodeQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(GeocodeQuery { lat, lon }) = query?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::BadRequest(format!(
            "coordinates out of range: lat={}, lon={}",
            lat, lon
        )));
    }

    let cache_key = format!("{:.3},{:.3}", lat, lon);
    if let Some(cached) = state.geocode_cache.get(&cache_key).await {
        tracing::debug!("Cache hit for geocode {}", cache_key);
        return Ok(Json(serde_json::json!({ "location": cached, "cached": true })));
    }

    // Only successful lookups are cached
    let location = match state.geocoder.lookup(lat, lon).await {
        Ok(name) => {
            state.geocode_cache.insert(cache_key, name.clone()).await;
            name
        }
        Err(e) => {
            tracing::warn!("Reverse geocoding ({}, {}) failed: {}", lat, lon, e);
            UNKNOWN_LOCATION.to_string()
        }
    };

    Ok(Json(serde_json::json!({ "location": location, "cached": false })))
}

#[cfg(feature = "api")]
async fn get_catalog() -> impl IntoResponse {
    let emission_sources: Vec<&str> = EmissionSource::all().iter().map(|s| s.display_name()).collect();
    let sequestration_efforts: Vec<&str> = SequestrationEffort::all().iter().map(|e| e.display_name()).collect();
    let plants: Vec<&str> = PlantSpecies::all().iter().map(|p| p.display_name()).collect();

    Json(serde_json::json!({
        "emission_sources": emission_sources,
        "sequestration_efforts": sequestration_efforts,
        "plants": plants,
    }))
}

// ============================================================================
// Helpers
// ============================================================================

#[cfg(feature = "api")]
fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}

#[cfg(feature = "api")]
fn to_json<T: serde::Serialize>(value: &T) -> Result<Json<serde_json::Value>, AppError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| AppError::Internal(format!("Failed to serialize response: {}", e)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
