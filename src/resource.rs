//! Map tiles and the biomes that generate them.
//!
//! Tiles are stateful: harvesting or improving one changes both the acting
//! agent's fitness and the tile's own counter, and that counter lives as long
//! as the map it sits on (one generation).

pub mod biome;
pub mod tile;

use std::fmt;

use rand::RngCore;

use crate::agent::Agent;

pub use biome::{Biome, BiomeEntry, BiomeParams};
pub use tile::{CacheTile, HazardTile, YieldTile};

/// Tile category. Decision policy branches on this tag, never on the
/// concrete tile type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Yield,
    Hazard,
    Cache,
}

/// What an agent can do to a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Harvest,
    Improve,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Harvest => f.write_str("harvest"),
            Action::Improve => f.write_str("improve"),
        }
    }
}

/// Capability set shared by every tile variant.
pub trait Resource: fmt::Debug {
    fn name(&self) -> &str;

    fn kind(&self) -> TileKind;

    fn is_hazard(&self) -> bool {
        self.kind() == TileKind::Hazard
    }

    fn harvest(&mut self, agent: &mut Agent, rng: &mut dyn RngCore);

    fn improve(&mut self, agent: &mut Agent, rng: &mut dyn RngCore);

    fn improve_cost(&self) -> i64;

    fn act(&mut self, action: Action, agent: &mut Agent, rng: &mut dyn RngCore) {
        match action {
            Action::Harvest => self.harvest(agent, rng),
            Action::Improve => self.improve(agent, rng),
        }
    }
}

/// Builds a fresh tile instance.
pub type TileFactory = fn(&mut dyn RngCore) -> Box<dyn Resource>;

fn farm(_: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(YieldTile::new("Farm"))
}

fn cpu(_: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(YieldTile::new("CPU"))
}

fn cache(_: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(CacheTile::new("Cache"))
}

fn ram(_: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(CacheTile::new("RAM"))
}

fn ambush_predator(rng: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(HazardTile::random("AmbushPredator", rng))
}

fn predator(rng: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(HazardTile::random("Predator", rng))
}

fn trap(rng: &mut dyn RngCore) -> Box<dyn Resource> {
    Box::new(HazardTile::random("Trap", rng))
}

/// Every tile that can be named in a biome catalog.
pub const REGISTRY: [(&str, TileFactory); 7] = [
    ("Farm", farm),
    ("CPU", cpu),
    ("Cache", cache),
    ("RAM", ram),
    ("AmbushPredator", ambush_predator),
    ("Predator", predator),
    ("Trap", trap),
];

pub fn factory(name: &str) -> Option<TileFactory> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, factory)| *factory)
}
