//! Evolutionary foraging on a cyclic resource map.
//!
//! Diploid agents walk a map of stateful tiles, decide what to do from their
//! expressed phenotypes and what they remember, and earn fitness in resource.
//! At each generation boundary the weakest are culled and the survivors mate
//! at random to fill the next generation.

/// Genes, chromosomes and genotypes
pub mod genetics;

/// Map tiles and the biomes that generate them
pub mod resource;

pub mod agent;

/// Map, population and turn scheduler
pub mod world;

pub mod error;
pub mod report;

use std::fs;

pub use error::{ConfigError, GeneticsError, Result, SimError};
use report::{Reporter, Statistics};
pub use world::{TickOutcome, World, WorldParams};

/// A world paired with the statistics tracker that follows it.
pub struct Simulation {
    world: World,
    statistics: Statistics,
}

impl Simulation {
    pub fn new(params: WorldParams) -> Result<Simulation> {
        Ok(Simulation {
            world: World::new(params)?,
            statistics: Statistics::new(),
        })
    }

    pub fn from_parameters(parameter_path: &str) -> Result<Simulation> {
        let params = Self::read_parameter_file(parameter_path)?;
        Simulation::new(params)
    }

    fn read_parameter_file(path_string: &str) -> Result<WorldParams> {
        let yaml_string = fs::read_to_string(path_string)?;
        Self::parse_parameter_yaml(&yaml_string)
    }

    fn parse_parameter_yaml(fstring: &str) -> Result<WorldParams> {
        let params: WorldParams = serde_yml::from_str(fstring)?;
        Ok(params)
    }

    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<TickOutcome> {
        self.world.tick(reporter, &mut self.statistics)
    }

    /// Ticks until the world finishes and returns the number of turns played.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<u64> {
        let mut turns = 0;
        while !self.world.is_finished() {
            self.step(reporter)?;
            turns += 1;
        }
        Ok(turns)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
