//! Foraging agents: identity, genotype, fitness and the per-turn decision
//! policy.

pub mod memory;
pub mod naming;

use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::GeneticsError;
use crate::genetics::{Genotype, Locus};
use crate::resource::{Action, Resource, TileKind};

pub use memory::{Memory, MemoryBank, RecallPolicy, Situation};

#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    genotype: Genotype,
    memory: MemoryBank,
    fitness: i64,
}

impl Agent {
    pub fn founder(rng: &mut dyn RngCore, mutation_risk: f64) -> Agent {
        let name = naming::random_name(rng).to_string();
        let genotype = Genotype::random(rng, mutation_risk);
        Agent::from_genotype(name, genotype)
    }

    /// Child of two selected parents. Dad's gamete becomes chromosome A,
    /// mom's becomes chromosome B.
    pub fn offspring(
        dad: &Agent,
        mom: &Agent,
        rng: &mut dyn RngCore,
        mutation_risk: f64,
    ) -> Result<Agent, GeneticsError> {
        let name = format!(
            "{} {}",
            naming::random_name(rng),
            naming::family_name(&mom.name, &dad.name)
        );
        let genotype = Genotype::inherit(&dad.genotype, &mom.genotype, rng, mutation_risk)?;
        Ok(Agent::from_genotype(name, genotype))
    }

    pub fn from_genotype(name: String, genotype: Genotype) -> Agent {
        Agent {
            name,
            genotype,
            memory: MemoryBank::new(),
            fitness: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    pub fn memory(&self) -> &MemoryBank {
        &self.memory
    }

    pub(crate) fn adjust_fitness(&mut self, delta: i64) {
        self.fitness += delta;
    }

    pub fn status(&self) -> String {
        format!("{}: {}¢", self.name, self.fitness)
    }

    pub fn gene_summary(&self) -> String {
        self.genotype.summary()
    }

    /// Plays one turn against the tile under the map cursor and returns the
    /// status line for the turn.
    pub fn tick(
        &mut self,
        tile: &mut dyn Resource,
        recall: RecallPolicy,
        rng: &mut dyn RngCore,
    ) -> String {
        if self.genotype.expressed_phenotype(Locus::Shy) && rng.gen_bool(0.5) {
            debug!(agent = %self.name, "does nothing");
            return self.status();
        }

        let before = self.fitness;
        let situation = Situation::of(tile.kind());

        let action = match self.memory.remember(situation, recall) {
            Some(action) => {
                debug!(agent = %self.name, %action, "remembers to {}", action);
                action
            }
            None => self.innate_action(tile, rng),
        };

        tile.act(action, self, rng);
        debug!(agent = %self.name, tile = tile.name(), "{} {}s the {}", self.name, action, tile.name());

        self.memory.add_memory(situation, action, self.fitness - before);
        self.status()
    }

    fn innate_action(&mut self, tile: &dyn Resource, rng: &mut dyn RngCore) -> Action {
        match tile.kind() {
            TileKind::Hazard => {
                let aggressive = self.genotype.expressed_phenotype(Locus::Aggression);
                if aggressive && self.fitness > tile.improve_cost() {
                    Action::Improve
                } else {
                    Action::Harvest
                }
            }
            TileKind::Yield => {
                let smart = self.genotype.expressed_phenotype(Locus::Intelligence);
                if smart && self.fitness > tile.improve_cost() {
                    Action::Improve
                } else {
                    Action::Harvest
                }
            }
            TileKind::Cache => {
                let harvest_not_store = rng.gen_bool(0.5);
                if self.genotype.expressed_phenotype(Locus::Intelligence) || harvest_not_store {
                    Action::Harvest
                } else {
                    Action::Improve
                }
            }
        }
    }
}
