use serde::{Deserialize, Serialize};

use crate::agent::RecallPolicy;
use crate::error::ConfigError;
use crate::resource::{Biome, BiomeParams};

fn default_mutation_risk() -> f64 {
    0.1
}

/// Everything a world needs at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// total turns before the run stops
    pub runtime: u64,
    /// agents per generation
    pub initial_population: usize,
    /// turns per generation, also the number of distinct tiles on the map
    pub generation_lifetime: usize,
    #[serde(default = "default_mutation_risk")]
    pub mutation_risk: f64,
    #[serde(default)]
    pub memory_recall: RecallPolicy,
    #[serde(default)]
    pub biome: BiomeParams,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl WorldParams {
    pub fn new() -> WorldParams {
        WorldParams {
            runtime: 48,
            initial_population: 5,
            generation_lifetime: 8,
            mutation_risk: default_mutation_risk(),
            memory_recall: RecallPolicy::Always,
            biome: BiomeParams::grassland(),
            rng_seed: None,
        }
    }

    pub fn get_test_params() -> WorldParams {
        WorldParams {
            runtime: 16,
            initial_population: 4,
            generation_lifetime: 4,
            mutation_risk: default_mutation_risk(),
            memory_recall: RecallPolicy::Always,
            biome: BiomeParams::grassland(),
            rng_seed: Some(17),
        }
    }

    /// Checks the scalar settings and resolves the biome catalog.
    pub fn validate(&self) -> Result<Biome, ConfigError> {
        if self.runtime == 0 {
            return Err(ConfigError::ZeroRuntime);
        }
        if self.initial_population == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.generation_lifetime == 0 {
            return Err(ConfigError::ZeroGenerationLifetime);
        }
        if !(0.0..=1.0).contains(&self.mutation_risk) {
            return Err(ConfigError::MutationRisk(self.mutation_risk));
        }

        Biome::from_params(&self.biome)
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        WorldParams::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WorldParams { runtime: 0, ..WorldParams::new() }, ConfigError::ZeroRuntime)]
    #[case(WorldParams { initial_population: 0, ..WorldParams::new() }, ConfigError::ZeroPopulation)]
    #[case(WorldParams { generation_lifetime: 0, ..WorldParams::new() }, ConfigError::ZeroGenerationLifetime)]
    #[case(WorldParams { mutation_risk: 1.5, ..WorldParams::new() }, ConfigError::MutationRisk(1.5))]
    #[case(WorldParams { biome: BiomeParams { entries: vec![] }, ..WorldParams::new() }, ConfigError::EmptyBiome)]
    fn test_rejects_malformed(#[case] params: WorldParams, #[case] expected: ConfigError) {
        assert_eq!(params.validate().unwrap_err(), expected);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(WorldParams::new().validate().is_ok());
        assert!(WorldParams::get_test_params().validate().is_ok());
    }

    #[test]
    fn test_nan_risk_rejected() {
        let params = WorldParams {
            mutation_risk: f64::NAN,
            ..WorldParams::new()
        };
        assert!(matches!(params.validate(), Err(ConfigError::MutationRisk(_))));
    }
}
