use thiserror::Error;

use crate::genetics::gene::Locus;

/// Result type for simulation setup and stepping.
pub type Result<T> = std::result::Result<T, SimError>;

/// Raised when a world is built from parameters it cannot run with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("runtime must be at least one turn")]
    ZeroRuntime,
    #[error("initial_population must be at least one agent")]
    ZeroPopulation,
    #[error("generation_lifetime must be at least one turn")]
    ZeroGenerationLifetime,
    #[error("mutation_risk {0} must be between 0.0 and 1.0")]
    MutationRisk(f64),
    #[error("biome catalog is empty")]
    EmptyBiome,
    #[error("biome entry {resource} has zero weight")]
    ZeroWeight { resource: String },
    #[error("biome weights sum to {total}, more than 100")]
    Overweight { total: u32 },
    #[error("no resource registered under the name {0:?}")]
    UnknownResource(String),
}

/// Raised when a chromatin string cannot be decoded into a chromosome.
#[derive(Debug, Error, PartialEq)]
pub enum GeneticsError {
    #[error("chromatin carries {actual} alleles, expected {expected}")]
    LocusCount { expected: usize, actual: usize },
    #[error("allele {segment:?} for locus {locus} must be a single letter")]
    MalformedAllele { locus: Locus, segment: String },
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("genetics: {0}")]
    Genetics(#[from] GeneticsError),
    #[error("unable to read parameters: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse parameters: {0}")]
    Parameters(#[from] serde_yml::Error),
}
