//! Simulation Property Tests
//!
//! Sweeps every climate pattern, season, category and a range of room sizes
//! with seeded random sources and checks the documented bounds and
//! fallbacks hold for all of them.

use chrono::NaiveDate;
use enviro_sim::climate::derived::{
    HEAT_INDEX_CEILING_C, HEAT_INDEX_MIN_C, UV_INDEX, VISIBILITY_KM, WIND_CHILL_MAX_C,
    WIND_CHILL_MIN_WIND_KMH,
};
use enviro_sim::climate::predictor::{HEAVY_RAIN_WIND_FACTOR, MAX_RAIN_COOLING_C, MAX_WASHOUT_FRACTION};
use enviro_sim::climate::Season;
use enviro_sim::utils::normalization::AQI_MAX;
use enviro_sim::utils::round1;
use enviro_sim::{
    analyze_indoor_plant, predict_environmental_data, room_size_factor, simulate_carbon_cycle,
    ClimatePattern, EmissionSource, EnvironmentalPrediction, PlantSpecies, Range,
    SequestrationEffort,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// One representative location per pattern
const LOCATIONS: &[(&str, ClimatePattern)] = &[
    ("Chennai", ClimatePattern::Tropical),
    ("Riyadh, Saudi Arabia", ClimatePattern::Desert),
    ("Helsinki", ClimatePattern::Cold),
    ("Berlin", ClimatePattern::TemperateEuropean),
    ("Seattle, WA", ClimatePattern::UsCoastal),
    ("Nairobi", ClimatePattern::Default),
];

// Mid-month date for each season (northern hemisphere)
const SEASON_MONTHS: &[u32] = &[1, 4, 7, 10];

// Names of fields outside the inclusive bounds for the pattern and season
fn out_of_bounds(pattern: ClimatePattern, season: Season, p: &EnvironmentalPrediction) -> Vec<&'static str> {
    let params = pattern.params();
    let temperature = params.temperature_for(season);

    let checks = [
        ("rainfall_mm", Range::new(0.0, params.rainfall.max), p.rainfall_mm),
        (
            "temperature_c",
            Range::new(temperature.min - MAX_RAIN_COOLING_C, temperature.max),
            p.temperature_c,
        ),
        ("humidity_percent", params.humidity_for(season), p.humidity_percent),
        (
            "wind_speed_kmh",
            Range::new(params.wind.min, round1(params.wind.max * HEAVY_RAIN_WIND_FACTOR)),
            p.wind_speed_kmh,
        ),
        (
            "spm_ugm3",
            Range::new(round1(params.spm.min * (1.0 - MAX_WASHOUT_FRACTION)), params.spm.max),
            p.spm_ugm3,
        ),
        ("feels_like_c", Range::new(-50.0, HEAT_INDEX_CEILING_C), p.feels_like_c),
        ("uv_index", UV_INDEX, p.uv_index),
        ("aqi", Range::new(0.0, AQI_MAX), p.aqi),
        ("visibility_km", VISIBILITY_KM, p.visibility_km),
        ("pressure_hpa", Range::new(995.0, 1025.0), p.pressure_hpa),
    ];

    checks
        .iter()
        .filter(|(_, range, value)| !range.contains(*value))
        .map(|(name, _, _)| *name)
        .collect()
}

#[test]
fn test_predictions_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);

    for &(location, pattern) in LOCATIONS {
        for &month in SEASON_MONTHS {
            let date = NaiveDate::from_ymd_opt(2024, month, 15).unwrap();

            for _ in 0..300 {
                let p = predict_environmental_data(location, date, &mut rng);
                assert_eq!(p.climate_pattern, pattern, "{}", location);

                let violations = out_of_bounds(pattern, p.season, &p);
                assert!(violations.is_empty(), "{} {}: {:?} in {:?}", location, date, violations, p);
            }
        }
    }
}

#[test]
fn test_feels_like_regimes() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut neutral_seen = 0;

    for &(location, _) in LOCATIONS {
        for &month in SEASON_MONTHS {
            let date = NaiveDate::from_ymd_opt(2023, month, 1).unwrap();
            for _ in 0..100 {
                let p = predict_environmental_data(location, date, &mut rng);
                let t = p.temperature_c;
                let wind_chill_applies = t <= WIND_CHILL_MAX_C && p.wind_speed_kmh > WIND_CHILL_MIN_WIND_KMH;

                if t < HEAT_INDEX_MIN_C && !wind_chill_applies {
                    assert_eq!(p.feels_like_c, t, "{:?}", p);
                    neutral_seen += 1;
                }
                if wind_chill_applies {
                    assert!(p.feels_like_c <= t + 0.1, "wind chill warmer than air: {:?}", p);
                }
            }
        }
    }

    assert!(neutral_seen > 0);
}

#[test]
fn test_rain_lowers_pressure() {
    let mut rng = StdRng::seed_from_u64(31);
    let date = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();

    for _ in 0..500 {
        let p = predict_environmental_data("Kolkata", date, &mut rng);
        if p.rainfall_mm > 0.0 {
            assert!(p.pressure_hpa <= 1010.0);
        } else {
            assert!(p.pressure_hpa >= 1010.0);
        }
    }
}

#[test]
fn test_carbon_balance_sign_matches() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut positive = 0;
    let mut negative = 0;

    for source in EmissionSource::all() {
        for effort in SequestrationEffort::all() {
            for _ in 0..100 {
                let sim = simulate_carbon_cycle(source.display_name(), effort.display_name(), &mut rng);
                assert!((sim.net_balance - (sim.sequestration - sim.emissions)).abs() < 1e-9);
                assert_eq!(sim.is_positive, sim.net_balance > 0.0);
                if sim.is_positive { positive += 1 } else { negative += 1 }
            }
        }
    }

    // Ranges overlap, so both outcomes occur
    assert!(positive > 0 && negative > 0);
}

#[test]
fn test_unknown_inputs_fall_back() {
    let mut rng = StdRng::seed_from_u64(9);

    let sim = simulate_carbon_cycle("Cow Farm", "Carbon Credits", &mut rng);
    let expected = format!(
        "{}\n\n{}",
        EmissionSource::Factory.explanation(),
        SequestrationEffort::Afforestation.explanation()
    );
    assert_eq!(sim.explanation, expected);

    let plant = analyze_indoor_plant("Fiddle Leaf Fig", 20.0, &mut rng);
    assert_eq!(plant.summary, PlantSpecies::SnakePlant.profile().fact);
}

#[test]
fn test_plant_scaling_examples() {
    assert_eq!(room_size_factor(10.0), 0.5);
    assert_eq!(room_size_factor(20.0), 1.0);
    assert_eq!(room_size_factor(40.0), 1.5);

    let mut rng = StdRng::seed_from_u64(12);
    for species in PlantSpecies::all() {
        let profile = species.profile();
        for room in [5.0, 12.5, 20.0, 35.0, 80.0] {
            let factor = room_size_factor(room);
            let a = analyze_indoor_plant(species.display_name(), room, &mut rng);
            let co2 = a.co2_absorption as f64;
            let o2 = a.o2_emission as f64;
            assert!(co2 >= (profile.co2_range.min * factor).round() && co2 <= (profile.co2_range.max * factor).round());
            assert!(o2 >= (profile.o2_range.min * factor).round() && o2 <= (profile.o2_range.max * factor).round());
        }
    }
}
