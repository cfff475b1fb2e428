use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::{factory, Resource, TileFactory};
use crate::error::ConfigError;

/// Percentile range a biome draw falls into.
const PERCENTILES: u32 = 100;

/// One catalog line as it appears in a parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeEntry {
    pub resource: String,
    pub weight: u32,
}

/// Serializable biome catalog. Entry order is the order draws walk it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomeParams {
    pub entries: Vec<BiomeEntry>,
}

impl BiomeParams {
    pub fn new(entries: &[(&str, u32)]) -> BiomeParams {
        BiomeParams {
            entries: entries
                .iter()
                .map(|(resource, weight)| BiomeEntry {
                    resource: resource.to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    pub fn grassland() -> BiomeParams {
        BiomeParams::new(&[("AmbushPredator", 20), ("Cache", 40), ("Farm", 40)])
    }
}

impl Default for BiomeParams {
    fn default() -> Self {
        BiomeParams::grassland()
    }
}

/// Immutable weighted catalog of tile factories. Weights are percentages.
#[derive(Clone)]
pub struct Biome {
    chances: Vec<(TileFactory, u32)>,
}

impl std::fmt::Debug for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Biome")
            .field("weights", &self.chances.iter().map(|(_, w)| *w).collect::<Vec<_>>())
            .finish()
    }
}

impl Biome {
    /// Resolves each entry through the tile registry and checks the weights.
    pub fn from_params(params: &BiomeParams) -> Result<Biome, ConfigError> {
        if params.entries.is_empty() {
            return Err(ConfigError::EmptyBiome);
        }

        let mut chances = Vec::with_capacity(params.entries.len());
        let mut total: u32 = 0;
        for entry in &params.entries {
            let build = factory(&entry.resource)
                .ok_or_else(|| ConfigError::UnknownResource(entry.resource.clone()))?;
            if entry.weight == 0 {
                return Err(ConfigError::ZeroWeight {
                    resource: entry.resource.clone(),
                });
            }
            // a huge weight must not wrap back under the limit
            total = total.saturating_add(entry.weight);
            if total > PERCENTILES {
                return Err(ConfigError::Overweight { total });
            }
            chances.push((build, entry.weight));
        }

        Ok(Biome { chances })
    }

    pub fn grassland() -> Result<Biome, ConfigError> {
        Biome::from_params(&BiomeParams::grassland())
    }

    /// Draws a percentile and returns a new tile from the first entry whose
    /// cumulative weight reaches it. Draws past the total fall through to the
    /// last entry.
    pub fn get_resource(&self, rng: &mut dyn RngCore) -> Box<dyn Resource> {
        let draw = rng.gen_range(0..PERCENTILES);

        let mut chance_sum = 0;
        for (build, weight) in &self.chances {
            chance_sum += weight;
            if draw <= chance_sum {
                return build(rng);
            }
        }

        // from_params never yields an empty catalog
        let (build, _) = self.chances[self.chances.len() - 1];
        build(rng)
    }
}
