//! Indoor Plant Analysis
//!
//! Species ranges describe a 20 m² reference room. Smaller rooms scale the
//! estimate down linearly; larger rooms saturate at 1.5×. Each analysis
//! also suggests how many plants the room needs: one per 10 m² up to one
//! per 5 m².

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup_tables::PlantSpecies;
use crate::utils::random_in_range;

/// Room size (m²) at which the species ranges apply unscaled
pub const REFERENCE_ROOM_SQM: f64 = 20.0;
/// Upper limit on the room-size multiplier
pub const MAX_SIZE_FACTOR: f64 = 1.5;
/// Floor area (m²) per plant at the low end of the recommendation
pub const SQM_PER_PLANT_SPARSE: f64 = 10.0;
/// Floor area (m²) per plant at the high end of the recommendation
pub const SQM_PER_PLANT_DENSE: f64 = 5.0;

/// Inclusive number of plants suggested for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantCountRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantAnalysis {
    /// Name as supplied by the caller, even when it fell back to the default species
    pub plant_name: String,
    pub room_size_sqm: f64,
    /// grams per day
    pub co2_absorption: i64,
    /// litres per day
    pub o2_emission: i64,
    pub summary: String,
    pub recommended_plants: PlantCountRange,
}

/// `min(room / 20, 1.5)`; negative or NaN sizes give 0
pub fn room_size_factor(room_size_sqm: f64) -> f64 {
    if room_size_sqm.is_nan() || room_size_sqm <= 0.0 {
        return 0.0;
    }
    (room_size_sqm / REFERENCE_ROOM_SQM).min(MAX_SIZE_FACTOR)
}

/// `max(1, ceil(room / 10))` to `ceil(room / 5)` plants
///
/// Non-positive or NaN sizes recommend a single plant.
pub fn recommended_plant_count(room_size_sqm: f64) -> PlantCountRange {
    if room_size_sqm.is_nan() || room_size_sqm <= 0.0 {
        return PlantCountRange { min: 1, max: 1 };
    }

    let min = (room_size_sqm / SQM_PER_PLANT_SPARSE).ceil().max(1.0) as u32;
    let max = (room_size_sqm / SQM_PER_PLANT_DENSE).ceil() as u32;
    PlantCountRange { min, max: max.max(min) }
}

/// Estimate CO₂ absorption and O₂ emission for a plant in a room
///
/// Unknown species use the Snake Plant profile.
pub fn analyze_indoor_plant<R: Rng + ?Sized>(
    plant_name: &str,
    room_size_sqm: f64,
    rng: &mut R,
) -> PlantAnalysis {
    let species = PlantSpecies::from_name(plant_name);
    let profile = species.profile();
    let factor = room_size_factor(room_size_sqm);

    debug!(
        "Analyzing '{}' as {:?} in {} m² (factor {:.2})",
        plant_name, species, room_size_sqm, factor
    );

    let co2 = random_in_range(rng, profile.co2_range) * factor;
    let o2 = random_in_range(rng, profile.o2_range) * factor;

    PlantAnalysis {
        plant_name: plant_name.to_string(),
        room_size_sqm,
        co2_absorption: co2.round() as i64,
        o2_emission: o2.round() as i64,
        summary: profile.fact.to_string(),
        recommended_plants: recommended_plant_count(room_size_sqm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_room_size_factor() {
        assert_relative_eq!(room_size_factor(10.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(room_size_factor(20.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(room_size_factor(30.0), 1.5, epsilon = 1e-12);
        assert_eq!(room_size_factor(40.0), MAX_SIZE_FACTOR);
        assert_eq!(room_size_factor(500.0), MAX_SIZE_FACTOR);
        assert_eq!(room_size_factor(0.0), 0.0);
        assert_eq!(room_size_factor(-12.0), 0.0);
        assert_eq!(room_size_factor(f64::NAN), 0.0);
    }

    #[test]
    fn test_recommended_plant_count() {
        let count = |room: f64| {
            let r = recommended_plant_count(room);
            (r.min, r.max)
        };
        assert_eq!(count(5.0), (1, 1));
        assert_eq!(count(10.0), (1, 2));
        assert_eq!(count(11.0), (2, 3));
        assert_eq!(count(100.0), (10, 20));
        assert_eq!(count(2.5), (1, 1));
        assert_eq!(count(0.0), (1, 1));
        assert_eq!(count(-4.0), (1, 1));
        assert_eq!(count(f64::NAN), (1, 1));
    }

    #[test]
    fn test_analysis_carries_recommendation() {
        let a = analyze_indoor_plant("Peace Lily", 11.0, &mut StdRng::seed_from_u64(8));
        assert_eq!(a.room_size_sqm, 11.0);
        assert_eq!(a.recommended_plants, PlantCountRange { min: 2, max: 3 });
    }

    #[test]
    fn test_reference_room_stays_in_species_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for species in PlantSpecies::all() {
            let profile = species.profile();
            for _ in 0..200 {
                let a = analyze_indoor_plant(species.display_name(), REFERENCE_ROOM_SQM, &mut rng);
                assert!(profile.co2_range.contains(a.co2_absorption as f64));
                assert!(profile.o2_range.contains(a.o2_emission as f64));
            }
        }
    }

    #[test]
    fn test_scaling_is_linear_then_saturates() {
        let base = analyze_indoor_plant("Areca Palm", 20.0, &mut StdRng::seed_from_u64(21));
        let half = analyze_indoor_plant("Areca Palm", 10.0, &mut StdRng::seed_from_u64(21));
        let capped = analyze_indoor_plant("Areca Palm", 40.0, &mut StdRng::seed_from_u64(21));
        let huge = analyze_indoor_plant("Areca Palm", 400.0, &mut StdRng::seed_from_u64(21));

        assert!((half.co2_absorption * 2 - base.co2_absorption).abs() <= 1);
        assert!((capped.o2_emission * 2 - base.o2_emission * 3).abs() <= 3);
        assert_eq!(capped.co2_absorption, huge.co2_absorption);
        assert_eq!(capped.o2_emission, huge.o2_emission);
    }

    #[test]
    fn test_unknown_species_uses_snake_plant() {
        let a = analyze_indoor_plant("Monstera", 20.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.plant_name, "Monstera");
        assert_eq!(a.summary, PlantSpecies::SnakePlant.profile().fact);
        assert!(PlantSpecies::SnakePlant.profile().co2_range.contains(a.co2_absorption as f64));
    }
}
