//! Carbon Cycle Simulation
//!
//! Emission and sequestration tonnages are drawn independently; the
//! categories only select the explanatory text.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup_tables::{EmissionSource, SequestrationEffort};
use crate::utils::{random_in_range, round1, Range};

/// Daily emissions (t CO₂)
pub const EMISSIONS_RANGE: Range = Range::new(10.0, 200.0);
/// Daily sequestration (t CO₂)
pub const SEQUESTRATION_RANGE: Range = Range::new(5.0, 150.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonSimulation {
    pub emissions: f64,
    pub sequestration: f64,
    /// sequestration - emissions
    pub net_balance: f64,
    /// net_balance > 0
    pub is_positive: bool,
    pub explanation: String,
}

/// Simulate a day of emissions against a sequestration effort
///
/// Unknown category names fall back to `Factory` / `Afforestation`.
pub fn simulate_carbon_cycle<R: Rng + ?Sized>(
    emission_source: &str,
    sequestration_effort: &str,
    rng: &mut R,
) -> CarbonSimulation {
    let source = EmissionSource::from_name(emission_source);
    let effort = SequestrationEffort::from_name(sequestration_effort);
    debug!("Simulating carbon cycle: {:?} vs {:?}", source, effort);

    simulate_categories(source, effort, rng)
}

/// Typed variant of [`simulate_carbon_cycle`]
pub fn simulate_categories<R: Rng + ?Sized>(
    source: EmissionSource,
    effort: SequestrationEffort,
    rng: &mut R,
) -> CarbonSimulation {
    let emissions = random_in_range(rng, EMISSIONS_RANGE);
    let sequestration = random_in_range(rng, SEQUESTRATION_RANGE);
    let (net_balance, is_positive) = carbon_balance(emissions, sequestration);

    CarbonSimulation {
        emissions,
        sequestration,
        net_balance,
        is_positive,
        explanation: format!("{}\n\n{}", source.explanation(), effort.explanation()),
    }
}

/// Net balance (one decimal) and whether it is strictly positive
pub fn carbon_balance(emissions: f64, sequestration: f64) -> (f64, bool) {
    let net = round1(sequestration - emissions);
    (net, net > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_balance_is_sequestration_minus_emissions() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let sim = simulate_carbon_cycle("Vehicles", "Soil Carbon", &mut rng);
            assert!(EMISSIONS_RANGE.contains(sim.emissions));
            assert!(SEQUESTRATION_RANGE.contains(sim.sequestration));
            assert_relative_eq!(sim.net_balance, sim.sequestration - sim.emissions, epsilon = 1e-9);
            assert_eq!(sim.is_positive, sim.net_balance > 0.0);
        }
    }

    #[test]
    fn test_zero_balance_is_not_positive() {
        assert_eq!(carbon_balance(42.5, 42.5), (0.0, false));
        assert_eq!(carbon_balance(42.5, 42.6), (0.1, true));
        assert_eq!(carbon_balance(100.0, 20.0), (-80.0, false));
    }

    #[test]
    fn test_explanation_joins_both_paragraphs() {
        let mut rng = StdRng::seed_from_u64(2);
        let sim = simulate_carbon_cycle("Power Plant", "Ocean Algae Farming", &mut rng);
        let expected = format!(
            "{}\n\n{}",
            EmissionSource::PowerPlant.explanation(),
            SequestrationEffort::OceanAlgaeFarming.explanation()
        );
        assert_eq!(sim.explanation, expected);
    }

    #[test]
    fn test_unknown_categories_use_defaults() {
        let mut rng = StdRng::seed_from_u64(2);
        let sim = simulate_carbon_cycle("Volcano", "Magic", &mut rng);
        assert!(sim.explanation.starts_with(EmissionSource::Factory.explanation()));
        assert!(sim.explanation.ends_with(SequestrationEffort::Afforestation.explanation()));
    }

    #[test]
    fn test_category_does_not_change_draws() {
        let a = simulate_carbon_cycle("Factory", "Afforestation", &mut StdRng::seed_from_u64(8));
        let b = simulate_carbon_cycle("Waste Burning", "Urban Green Roofs", &mut StdRng::seed_from_u64(8));
        assert_eq!(a.emissions, b.emissions);
        assert_eq!(a.sequestration, b.sequestration);
    }
}
