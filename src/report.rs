//! Plain-text report formatting for the three simulations

use serde::Serialize;

use crate::carbon_cycle::CarbonSimulation;
use crate::climate::EnvironmentalPrediction;
use crate::indoor_plants::PlantAnalysis;

const RULE: &str = "----------------------------------------";

/// All three results of one report run
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalReport {
    pub prediction: EnvironmentalPrediction,
    pub carbon: CarbonSimulation,
    pub plant: PlantAnalysis,
}

/// Text formatter for reports
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(report: &EnvironmentalReport) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(&Self::format_prediction(&report.prediction));
        out.push('\n');
        out.push_str(&Self::format_carbon(&report.carbon));
        out.push('\n');
        out.push_str(&Self::format_plant(&report.plant));
        out
    }

    pub fn format_prediction(p: &EnvironmentalPrediction) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(&format!(
            "--- Environmental Prediction for {} on {} ---\n",
            p.location, p.date
        ));
        out.push_str(&format!(
            "{:<20}: {} ({})\n",
            "Season / Pattern",
            p.season.display_name(),
            p.climate_pattern.display_name()
        ));

        let rows: [(&str, String); 11] = [
            ("Rainfall", format!("{:.1} mm", p.rainfall_mm)),
            ("Temperature", format!("{:.1} °C", p.temperature_c)),
            ("Feels Like", format!("{:.1} °C", p.feels_like_c)),
            ("Humidity", format!("{:.1} %", p.humidity_percent)),
            ("Wind Speed", format!("{:.1} km/h", p.wind_speed_kmh)),
            ("SPM", format!("{:.1} µg/m³", p.spm_ugm3)),
            ("AQI", format!("{:.1}", p.aqi)),
            ("Air Quality", format!("{}. {}", p.air_quality.display_name(), p.air_quality.advice())),
            ("UV Index", format!("{:.1}", p.uv_index)),
            ("Visibility", format!("{:.1} km", p.visibility_km)),
            ("Pressure", format!("{:.1} hPa", p.pressure_hpa)),
        ];
        for (label, value) in rows.iter() {
            out.push_str(&format!("{:<20}: {}\n", label, value));
        }
        out.push_str(RULE);
        out.push('\n');
        out
    }

    pub fn format_carbon(c: &CarbonSimulation) -> String {
        let verdict = if c.is_positive {
            "net positive (more carbon removed than emitted)"
        } else {
            "net negative (emissions exceed removal)"
        };

        let mut out = String::with_capacity(1024);
        out.push_str("--- GHG Monitoring and Carbon Sequestration ---\n");
        out.push_str(&format!("{:<20}: {:.1} t CO₂/day\n", "Emissions", c.emissions));
        out.push_str(&format!("{:<20}: {:.1} t CO₂/day\n", "Sequestration", c.sequestration));
        out.push_str(&format!("{:<20}: {:+.1} t CO₂/day, {}\n\n", "Net Balance", c.net_balance, verdict));
        out.push_str(&c.explanation);
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out
    }

    pub fn format_plant(a: &PlantAnalysis) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(&format!("--- Indoor Plant Performance ({}) ---\n", a.plant_name));
        out.push_str(&format!("{:<20}: {} g/day\n", "CO₂ Absorption", a.co2_absorption));
        out.push_str(&format!("{:<20}: {} L/day\n\n", "O₂ Emission", a.o2_emission));
        out.push_str(&a.summary);
        out.push_str("\n\n");
        out.push_str(&format!(
            "For a {} m² room, consider {} to {} plants. Place them near windows.\n",
            a.room_size_sqm, a.recommended_plants.min, a.recommended_plants.max
        ));
        out.push_str(RULE);
        out.push('\n');
        out
    }
}
