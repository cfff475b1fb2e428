use rand::{Rng, RngCore};
use tracing::warn;

use crate::agent::Agent;
use crate::error::GeneticsError;

/// Drops every agent at the population's minimum fitness. A fully tied
/// population leaves no survivors.
pub fn select_survivors(mut population: Vec<Agent>) -> Vec<Agent> {
    let min = match population.iter().map(Agent::fitness).min() {
        Some(min) => min,
        None => return population,
    };

    population.retain(|agent| agent.fitness() > min);
    population
}

/// Builds the next generation from the survivors of `population`.
///
/// Each child gets two parents drawn uniformly with replacement, so an agent
/// may parent several children or pair with itself. If selection wipes out
/// everyone, a fresh founder generation is seeded instead.
pub fn next_generation(
    population: Vec<Agent>,
    size: usize,
    mutation_risk: f64,
    rng: &mut dyn RngCore,
) -> Result<Vec<Agent>, GeneticsError> {
    let survivors = select_survivors(population);

    if survivors.is_empty() {
        warn!(size, "no survivors after selection, reseeding founders");
        return Ok((0..size)
            .map(|_| Agent::founder(rng, mutation_risk))
            .collect());
    }

    let mut children = Vec::with_capacity(size);
    for _ in 0..size {
        let mom = &survivors[rng.gen_range(0..survivors.len())];
        let dad = &survivors[rng.gen_range(0..survivors.len())];
        children.push(Agent::offspring(dad, mom, rng, mutation_risk)?);
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::Genotype;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    fn population(fitness: &[i64]) -> Vec<Agent> {
        let mut rng = StdRng::seed_from_u64(99);
        fitness
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let mut agent =
                    Agent::from_genotype(format!("Agent{i}"), Genotype::random(&mut rng, 0.0));
                agent.adjust_fitness(*f);
                agent
            })
            .collect()
    }

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    #[rstest]
    #[case(&[3, 1, 4, 1, 5], &["Agent0", "Agent2", "Agent4"])]
    #[case(&[-2, 0, -2], &["Agent1"])]
    #[case(&[1, 7], &["Agent1"])]
    #[case(&[2, 2, 2], &[])]
    #[case(&[0], &[])]
    fn test_select_survivors(#[case] fitness: &[i64], #[case] expected: &[&str]) {
        let survivors = select_survivors(population(fitness));
        let names: Vec<&str> = survivors.iter().map(|a| a.name()).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn test_children_descend_from_survivors(mut rng: StdRng) {
        let next = next_generation(population(&[0, 5, 9]), 6, 0.1, &mut rng).unwrap();
        assert_eq!(next.len(), 6);
        for child in &next {
            assert_eq!(child.fitness(), 0);
            // family name is built from Agent1 / Agent2, never the culled Agent0
            let family = child.name().split(' ').nth(1).unwrap();
            assert!(family == "Agent1" || family == "Agent2", "{family}");
        }
    }

    #[rstest]
    fn test_tied_population_reseeds_founders(mut rng: StdRng) {
        let next = next_generation(population(&[4, 4, 4, 4]), 5, 0.1, &mut rng).unwrap();
        assert_eq!(next.len(), 5);
        // founders carry a single name
        assert!(next.iter().all(|a| !a.name().contains(' ')));
    }
}
