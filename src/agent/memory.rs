use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resource::{Action, TileKind};

/// Situation key built from independent tile-category tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Situation {
    pub yield_tile: bool,
    pub hazard: bool,
    pub cache: bool,
}

impl Situation {
    pub fn of(kind: TileKind) -> Situation {
        Situation {
            yield_tile: kind == TileKind::Yield,
            hazard: kind == TileKind::Hazard,
            cache: kind == TileKind::Cache,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Memory {
    pub action: Action,
    pub utility_change: i64,
}

/// Which remembered actions are allowed to override innate behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallPolicy {
    /// Any remembered action wins, even one that cost fitness.
    #[default]
    Always,
    /// Only memories that paid off (utility change above zero) are used.
    Profitable,
}

/// Best action seen so far per situation.
#[derive(Clone, Debug, Default)]
pub struct MemoryBank {
    store: HashMap<Situation, Memory>,
}

impl MemoryBank {
    pub fn new() -> MemoryBank {
        MemoryBank::default()
    }

    /// Keeps the observation only if nothing is stored for the situation yet
    /// or it strictly beats the stored utility change.
    pub fn add_memory(&mut self, situation: Situation, action: Action, utility_change: i64) {
        let better = match self.store.get(&situation) {
            None => true,
            Some(known) => known.utility_change < utility_change,
        };
        if better {
            self.store.insert(situation, Memory { action, utility_change });
        }
    }

    pub fn remember(&self, situation: Situation, policy: RecallPolicy) -> Option<Action> {
        let memory = self.store.get(&situation)?;
        match policy {
            RecallPolicy::Always => Some(memory.action),
            RecallPolicy::Profitable if memory.utility_change > 0 => Some(memory.action),
            RecallPolicy::Profitable => None,
        }
    }

    pub fn recall(&self, situation: Situation) -> Option<&Memory> {
        self.store.get(&situation)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
