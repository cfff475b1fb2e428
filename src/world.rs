//! The world owns the map, the population and the turn scheduler.
//!
//! Each tick moves every agent against the tile under the map cursor. When a
//! generation's turns run out the population is evaluated, culled and bred
//! into a new generation, and a fresh map is drawn from the biome. The run
//! finishes once the configured number of turns has been played.

pub mod params;
pub mod selection;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::agent::Agent;
use crate::error::Result;
use crate::report::{Reporter, Statistics};
use crate::resource::{Biome, Resource};

pub use params::WorldParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldState {
    Running,
    Finished,
}

/// What a single tick led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The population was replaced; carries the new generation index.
    GenerationBoundary(u32),
    Finished,
}

pub struct World {
    params: WorldParams,
    biome: Biome,
    // base tile sequence; the cyclic map is this sequence twice over, with
    // both halves sharing the same tile instances
    tiles: Vec<Box<dyn Resource>>,
    population: Vec<Agent>,
    generation: u32,
    turns_remaining: usize,
    run: u64,
    state: WorldState,
    rng: Box<dyn RngCore>,
}

impl World {
    /// Builds a world with a generator seeded from `rng_seed`, or from
    /// entropy when no seed is configured.
    pub fn new(params: WorldParams) -> Result<World> {
        let rng: Box<dyn RngCore> = match params.rng_seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        World::with_rng(params, rng)
    }

    pub fn with_rng(params: WorldParams, mut rng: Box<dyn RngCore>) -> Result<World> {
        let biome = params.validate()?;

        let population = (0..params.initial_population)
            .map(|_| Agent::founder(rng.as_mut(), params.mutation_risk))
            .collect();

        let mut world = World {
            turns_remaining: params.generation_lifetime,
            params,
            biome,
            tiles: Vec::new(),
            population,
            generation: 1,
            run: 1,
            state: WorldState::Running,
            rng,
        };
        world.generate_map();

        info!(
            population = world.population.len(),
            lifetime = world.params.generation_lifetime,
            "simulation start"
        );
        Ok(world)
    }

    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    pub fn population(&self) -> &[Agent] {
        &self.population
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn turns_remaining(&self) -> usize {
        self.turns_remaining
    }

    /// Number of the turn about to be played, starting at 1.
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == WorldState::Finished
    }

    /// Length of the cyclic map, twice the number of distinct tiles.
    pub fn map_len(&self) -> usize {
        self.tiles.len() * 2
    }

    pub fn tile_at(&self, index: usize) -> &dyn Resource {
        self.tiles[index % self.tiles.len()].as_ref()
    }

    /// Map position the agents face this turn.
    pub fn cursor(&self) -> usize {
        cursor_index(
            self.params.generation_lifetime,
            self.turns_remaining,
            self.map_len(),
        )
    }

    pub fn current_tile(&self) -> &dyn Resource {
        self.tile_at(self.cursor())
    }

    /// Plays one turn. Ticking a finished world does nothing.
    pub fn tick(
        &mut self,
        reporter: &mut dyn Reporter,
        statistics: &mut Statistics,
    ) -> Result<TickOutcome> {
        if self.is_finished() {
            return Ok(TickOutcome::Finished);
        }

        let index = self.cursor() % self.tiles.len();
        let tile = self.tiles[index].as_mut();
        let recall = self.params.memory_recall;

        let mut statuses = Vec::with_capacity(self.population.len());
        for agent in &mut self.population {
            statuses.push(agent.tick(tile, recall, self.rng.as_mut()));
        }
        reporter.turn(self.run, tile.name(), &statuses);

        self.run += 1;
        if self.run > self.params.runtime {
            self.evaluate_generation(reporter, statistics);
            self.state = WorldState::Finished;
            info!(generation = self.generation, "simulation finished");
            return Ok(TickOutcome::Finished);
        }

        self.turns_remaining -= 1;
        if self.turns_remaining == 0 {
            self.evaluate_generation(reporter, statistics);
            self.generate_generation(reporter)?;
            self.generate_map();
            self.generation += 1;
            self.turns_remaining = self.params.generation_lifetime;
            info!(generation = self.generation, "beginning generation");
            return Ok(TickOutcome::GenerationBoundary(self.generation));
        }

        Ok(TickOutcome::Running)
    }

    /// Records every agent with the statistics tracker and reports the best
    /// one seen so far.
    fn evaluate_generation(&self, reporter: &mut dyn Reporter, statistics: &mut Statistics) {
        for agent in &self.population {
            statistics.record_agent(agent.name(), &agent.gene_summary(), agent.fitness());
        }
        if let Some(best) = statistics.best() {
            reporter.best(best);
        }
    }

    fn generate_generation(&mut self, reporter: &mut dyn Reporter) -> Result<()> {
        let summaries: Vec<String> = self.population.iter().map(Agent::gene_summary).collect();
        reporter.generation(self.generation, &summaries);

        let population = std::mem::take(&mut self.population);
        self.population = selection::next_generation(
            population,
            self.params.initial_population,
            self.params.mutation_risk,
            self.rng.as_mut(),
        )?;
        Ok(())
    }

    fn generate_map(&mut self) {
        let rng = self.rng.as_mut();
        self.tiles = (0..self.params.generation_lifetime)
            .map(|_| self.biome.get_resource(rng))
            .collect();
    }
}

/// `(lifetime - turns_remaining) mod (map_len / 2)`: walks the first half of
/// the doubled map once per generation.
pub fn cursor_index(generation_lifetime: usize, turns_remaining: usize, map_len: usize) -> usize {
    (generation_lifetime - turns_remaining) % (map_len / 2)
}
