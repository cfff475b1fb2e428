use rand::{Rng, RngCore};

use super::{Resource, TileKind};
use crate::agent::Agent;

const INITIAL_YIELD: i64 = 1;
const INITIAL_CACHE: i64 = 1;
const CACHE_RESET: i64 = 3;
// never worth improving voluntarily
const CACHE_IMPROVE_COST: i64 = 999;

/// Farm-like tile. Harvest pays the current yield, improving raises it for
/// the rest of the map's life.
#[derive(Debug, Clone)]
pub struct YieldTile {
    name: &'static str,
    crop_yield: i64,
}

impl YieldTile {
    pub fn new(name: &'static str) -> YieldTile {
        YieldTile {
            name,
            crop_yield: INITIAL_YIELD,
        }
    }

    pub fn crop_yield(&self) -> i64 {
        self.crop_yield
    }
}

impl Resource for YieldTile {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> TileKind {
        TileKind::Yield
    }

    fn harvest(&mut self, agent: &mut Agent, _: &mut dyn RngCore) {
        agent.adjust_fitness(self.crop_yield);
    }

    fn improve(&mut self, agent: &mut Agent, _: &mut dyn RngCore) {
        agent.adjust_fitness(-self.improve_cost());
        self.crop_yield += 1;
    }

    fn improve_cost(&self) -> i64 {
        self.crop_yield + 1
    }
}

/// Store-like tile. Harvest empties the cache back to its reset level,
/// improving tops it up for free.
#[derive(Debug, Clone)]
pub struct CacheTile {
    name: &'static str,
    cache: i64,
}

impl CacheTile {
    pub fn new(name: &'static str) -> CacheTile {
        CacheTile {
            name,
            cache: INITIAL_CACHE,
        }
    }

    pub fn cache(&self) -> i64 {
        self.cache
    }
}

impl Resource for CacheTile {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> TileKind {
        TileKind::Cache
    }

    fn harvest(&mut self, agent: &mut Agent, _: &mut dyn RngCore) {
        agent.adjust_fitness(self.cache);
        self.cache = CACHE_RESET;
    }

    fn improve(&mut self, _: &mut Agent, _: &mut dyn RngCore) {
        self.cache += 1;
    }

    fn improve_cost(&self) -> i64 {
        CACHE_IMPROVE_COST
    }
}

/// Predator or trap. Passing by may hurt while it still has health;
/// attacking always hurts and wears it down.
#[derive(Debug, Clone)]
pub struct HazardTile {
    name: &'static str,
    health: i64,
}

impl HazardTile {
    pub fn new(name: &'static str, health: i64) -> HazardTile {
        HazardTile { name, health }
    }

    /// Health drawn as 1, 2 or 3 with weights 1:2:1.
    pub fn random(name: &'static str, rng: &mut dyn RngCore) -> HazardTile {
        let health = (rng.gen::<f64>() * 2.0).round() as i64 + 1;
        HazardTile::new(name, health)
    }

    pub fn health(&self) -> i64 {
        self.health
    }
}

impl Resource for HazardTile {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> TileKind {
        TileKind::Hazard
    }

    fn harvest(&mut self, agent: &mut Agent, rng: &mut dyn RngCore) {
        if self.health > 0 && rng.gen_bool(0.5) {
            agent.adjust_fitness(-1);
        }
    }

    fn improve(&mut self, agent: &mut Agent, _: &mut dyn RngCore) {
        agent.adjust_fitness(-1);
        self.health -= 1;
    }

    fn improve_cost(&self) -> i64 {
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    #[fixture]
    fn agent() -> Agent {
        Agent::founder(&mut StdRng::seed_from_u64(3), 0.0)
    }

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[rstest]
    fn test_yield_harvest_and_improve(mut agent: Agent, mut rng: StdRng) {
        let mut farm = YieldTile::new("Farm");
        farm.harvest(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), 1);

        assert_eq!(farm.improve_cost(), 2);
        farm.improve(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), -1);
        assert_eq!(farm.crop_yield(), 2);

        // improvement persists for later harvests
        farm.harvest(&mut agent, &mut rng);
        farm.harvest(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), 3);
        assert_eq!(farm.improve_cost(), 3);
    }

    #[rstest]
    fn test_cache_harvest_resets(mut agent: Agent, mut rng: StdRng) {
        let mut cache = CacheTile::new("Cache");
        cache.improve(&mut agent, &mut rng);
        cache.improve(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), 0);
        assert_eq!(cache.cache(), 3);

        cache.harvest(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), 3);
        cache.harvest(&mut agent, &mut rng);
        assert_eq!(agent.fitness(), 6);
        assert_eq!(cache.cache(), 3);
        assert_eq!(cache.improve_cost(), 999);
    }

    #[rstest]
    fn test_hazard_attack(mut agent: Agent, mut rng: StdRng) {
        let mut predator = HazardTile::new("Predator", 2);
        assert_eq!(predator.improve_cost(), 2);
        predator.improve(&mut agent, &mut rng);
        predator.improve(&mut agent, &mut rng);
        predator.improve(&mut agent, &mut rng);
        // fitness is not clamped
        assert_eq!(agent.fitness(), -3);
        assert_eq!(predator.health(), -1);
    }

    #[rstest]
    fn test_spent_hazard_is_harmless(mut agent: Agent) {
        let mut trap = HazardTile::new("Trap", 0);
        // StepRng(0, 0) always lands the coin
        let mut always = StepRng::new(0, 0);
        for _ in 0..100 {
            trap.harvest(&mut agent, &mut always);
        }
        assert_eq!(agent.fitness(), 0);
    }

    #[rstest]
    fn test_live_hazard_harvest(mut agent: Agent) {
        let mut predator = HazardTile::new("Predator", 1);
        predator.harvest(&mut agent, &mut StepRng::new(0, 0));
        assert_eq!(agent.fitness(), -1);
        predator.harvest(&mut agent, &mut StepRng::new(u64::MAX, 0));
        assert_eq!(agent.fitness(), -1);
        // passive exposure never wears the hazard down
        assert_eq!(predator.health(), 1);
    }

    #[rstest]
    fn test_random_health_range(mut rng: StdRng) {
        let mut seen = [0usize; 4];
        for _ in 0..1000 {
            let hazard = HazardTile::random("Predator", &mut rng);
            assert!((1..=3).contains(&hazard.health()));
            seen[hazard.health() as usize] += 1;
        }
        assert!(seen[2] > seen[1] && seen[2] > seen[3]);
    }
}
