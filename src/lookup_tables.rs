//! Category Lookup Tables
//!
//! Closed enumerations of selectable emission sources, sequestration efforts
//! and indoor plant species, with their static explanatory text and
//! sampling ranges. Unknown names resolve to each table's default entry.

use serde::Serialize;

use crate::utils::Range;

/// Normalise a user-supplied category name for matching
///
/// Case, surrounding whitespace, and `_`/`-` versus space are ignored, so
/// "power_plant", "Power Plant" and " power-plant " are the same key.
fn normalize_key(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// EMISSION SOURCES
// ============================================================================

/// Source of greenhouse gas emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EmissionSource {
    #[default]
    Factory,
    Vehicles,
    PowerPlant,
    WasteBurning,
}

impl EmissionSource {
    /// Resolve a display name, falling back to `Factory`
    pub fn from_name(name: &str) -> Self {
        let key = normalize_key(name);
        Self::all()
            .iter()
            .copied()
            .find(|source| normalize_key(source.display_name()) == key)
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionSource::Factory => "Factory",
            EmissionSource::Vehicles => "Vehicles",
            EmissionSource::PowerPlant => "Power Plant",
            EmissionSource::WasteBurning => "Waste Burning",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            EmissionSource::Factory => "Industrial factories are significant contributors to atmospheric CO₂, releasing emissions through energy consumption and manufacturing processes. Modern facilities implement various mitigation strategies including carbon capture systems and renewable energy adoption.",
            EmissionSource::Vehicles => "Transportation sector emissions arise from fossil fuel combustion in engines. Electric vehicle adoption and improved fuel efficiency standards are gradually reducing this impact, though the global vehicle fleet continues to grow.",
            EmissionSource::PowerPlant => "Power generation facilities, particularly those using coal and natural gas, represent major point sources of greenhouse gas emissions. The transition to renewable energy sources is crucial for reducing this environmental impact.",
            EmissionSource::WasteBurning => "Open burning of waste releases harmful pollutants and greenhouse gases. Proper waste management through recycling, composting, and controlled incineration with emission controls can significantly reduce these impacts.",
        }
    }

    pub fn all() -> &'static [EmissionSource] {
        &[
            EmissionSource::Factory,
            EmissionSource::Vehicles,
            EmissionSource::PowerPlant,
            EmissionSource::WasteBurning,
        ]
    }
}

// ============================================================================
// SEQUESTRATION EFFORTS
// ============================================================================

/// Carbon removal effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SequestrationEffort {
    #[default]
    Afforestation,
    OceanAlgaeFarming,
    SoilCarbon,
    UrbanGreenRoofs,
}

impl SequestrationEffort {
    /// Resolve a display name, falling back to `Afforestation`
    pub fn from_name(name: &str) -> Self {
        let key = normalize_key(name);
        Self::all()
            .iter()
            .copied()
            .find(|effort| normalize_key(effort.display_name()) == key)
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SequestrationEffort::Afforestation => "Afforestation",
            SequestrationEffort::OceanAlgaeFarming => "Ocean Algae Farming",
            SequestrationEffort::SoilCarbon => "Soil Carbon",
            SequestrationEffort::UrbanGreenRoofs => "Urban Green Roofs",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            SequestrationEffort::Afforestation => "Planting trees on previously non-forested land creates new carbon sinks. A mature forest can absorb substantial amounts of CO₂ annually, while also providing biodiversity benefits and ecosystem services.",
            SequestrationEffort::OceanAlgaeFarming => "Marine algae are efficient carbon absorbers, converting CO₂ through photosynthesis. Ocean farming initiatives show promise for large-scale carbon sequestration while producing valuable biomass products.",
            SequestrationEffort::SoilCarbon => "Regenerative agricultural practices increase soil organic carbon content. Cover cropping, reduced tillage, and composting enhance the soil's ability to store carbon long-term while improving fertility.",
            SequestrationEffort::UrbanGreenRoofs => "Green roofs and urban vegetation reduce building energy consumption while absorbing CO₂. They also mitigate urban heat islands and improve air quality in densely populated areas.",
        }
    }

    pub fn all() -> &'static [SequestrationEffort] {
        &[
            SequestrationEffort::Afforestation,
            SequestrationEffort::OceanAlgaeFarming,
            SequestrationEffort::SoilCarbon,
            SequestrationEffort::UrbanGreenRoofs,
        ]
    }
}

// ============================================================================
// INDOOR PLANTS
// ============================================================================

/// Air-purification profile of one species
#[derive(Debug, Clone, Copy)]
pub struct PlantProfile {
    /// CO₂ absorption, grams per day in a 20 m² room
    pub co2_range: Range,
    /// O₂ emission, litres per day in a 20 m² room
    pub o2_range: Range,
    pub fact: &'static str,
}

static SNAKE_PLANT: PlantProfile = PlantProfile {
    co2_range: Range::new(40.0, 80.0),
    o2_range: Range::new(100.0, 200.0),
    fact: "Known for its exceptional air-purifying qualities, the Snake Plant (Sansevieria) is one of the few plants that converts CO₂ to oxygen even at night through a unique form of photosynthesis.",
};

static ALOE_VERA: PlantProfile = PlantProfile {
    co2_range: Range::new(30.0, 60.0),
    o2_range: Range::new(80.0, 150.0),
    fact: "Beyond its medicinal properties, Aloe Vera is an effective air purifier that removes formaldehyde and benzene. It releases oxygen at night, making it ideal for bedrooms.",
};

static ARECA_PALM: PlantProfile = PlantProfile {
    co2_range: Range::new(60.0, 100.0),
    o2_range: Range::new(150.0, 300.0),
    fact: "The Areca Palm is a powerhouse of air purification, capable of processing large volumes of air. NASA research has confirmed its effectiveness at removing indoor pollutants.",
};

static PEACE_LILY: PlantProfile = PlantProfile {
    co2_range: Range::new(35.0, 70.0),
    o2_range: Range::new(90.0, 180.0),
    fact: "Peace Lilies excel at removing ammonia, benzene, and formaldehyde from indoor air. They thrive in low light conditions and indicate when they need water.",
};

/// Indoor plant species with a known profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PlantSpecies {
    #[default]
    SnakePlant,
    AloeVera,
    ArecaPalm,
    PeaceLily,
}

impl PlantSpecies {
    /// Resolve a display name, falling back to `SnakePlant`
    pub fn from_name(name: &str) -> Self {
        let key = normalize_key(name);
        Self::all()
            .iter()
            .copied()
            .find(|species| normalize_key(species.display_name()) == key)
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlantSpecies::SnakePlant => "Snake Plant",
            PlantSpecies::AloeVera => "Aloe Vera",
            PlantSpecies::ArecaPalm => "Areca Palm",
            PlantSpecies::PeaceLily => "Peace Lily",
        }
    }

    pub fn profile(&self) -> &'static PlantProfile {
        match self {
            PlantSpecies::SnakePlant => &SNAKE_PLANT,
            PlantSpecies::AloeVera => &ALOE_VERA,
            PlantSpecies::ArecaPalm => &ARECA_PALM,
            PlantSpecies::PeaceLily => &PEACE_LILY,
        }
    }

    pub fn all() -> &'static [PlantSpecies] {
        &[
            PlantSpecies::SnakePlant,
            PlantSpecies::AloeVera,
            PlantSpecies::ArecaPalm,
            PlantSpecies::PeaceLily,
        ]
    }
}
