use std::collections::HashMap;

use rand::{Rng, RngCore};
use tracing::trace;

use super::chromosome::Chromosome;
use super::gene::Locus;
use super::CHROMATIN_SEPARATOR;
use crate::error::GeneticsError;

/// Which half of the diploid pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromosomeSlot {
    A,
    B,
}

/// A diploid pair of chromosomes plus a memo of expressed phenotypes.
///
/// Chromosomes never change after construction, so each locus is expressed
/// at most once and the answer is cached for the genotype's lifetime.
#[derive(Clone, Debug)]
pub struct Genotype {
    chromosome_a: Chromosome,
    chromosome_b: Chromosome,
    phenotype: HashMap<Locus, bool>,
    mutation_mark: Option<ChromosomeSlot>,
}

impl Genotype {
    pub fn from_chromosomes(chromosome_a: Chromosome, chromosome_b: Chromosome) -> Genotype {
        Genotype {
            chromosome_a,
            chromosome_b,
            phenotype: HashMap::new(),
            mutation_mark: None,
        }
    }

    /// Founder genotype built from two random chromosomes.
    pub fn random(rng: &mut dyn RngCore, mutation_risk: f64) -> Genotype {
        let a = Chromosome::random(rng);
        let b = Chromosome::random(rng);
        let mut genotype = Genotype::from_chromosomes(a, b);
        genotype.roll_mutation(rng, mutation_risk);
        genotype
    }

    /// Child genotype: one chromatin readout from each parent becomes one of
    /// the child's chromosomes.
    pub fn inherit(
        parent_a: &Genotype,
        parent_b: &Genotype,
        rng: &mut dyn RngCore,
        mutation_risk: f64,
    ) -> Result<Genotype, GeneticsError> {
        let chromatin_a = parent_a.chromatin(rng);
        let chromatin_b = parent_b.chromatin(rng);

        let a = Chromosome::from_chromatin(&chromatin_a)?;
        let b = Chromosome::from_chromatin(&chromatin_b)?;
        let mut genotype = Genotype::from_chromosomes(a, b);
        genotype.roll_mutation(rng, mutation_risk);
        Ok(genotype)
    }

    // with probability `risk` one chromosome, picked uniformly, is handed to
    // the mutation hook
    fn roll_mutation(&mut self, rng: &mut dyn RngCore, risk: f64) {
        if rng.gen::<f64>() >= risk {
            return;
        }

        let slot = if rng.gen_bool(0.5) {
            ChromosomeSlot::A
        } else {
            ChromosomeSlot::B
        };
        trace!(?slot, "chromosome marked for mutation");

        match slot {
            ChromosomeSlot::A => self.chromosome_a.mutate(),
            ChromosomeSlot::B => self.chromosome_b.mutate(),
        }
        self.mutation_mark = Some(slot);
    }

    pub fn chromosome(&self, slot: ChromosomeSlot) -> &Chromosome {
        match slot {
            ChromosomeSlot::A => &self.chromosome_a,
            ChromosomeSlot::B => &self.chromosome_b,
        }
    }

    /// The chromosome picked by the mutation roll at construction, if any.
    pub fn mutation_mark(&self) -> Option<ChromosomeSlot> {
        self.mutation_mark
    }

    /// Expression rule: a dominant allele on A wins, then a dominant allele
    /// on B, otherwise B's recessive expression.
    pub fn expressed_phenotype(&mut self, locus: Locus) -> bool {
        if let Some(&cached) = self.phenotype.get(&locus) {
            return cached;
        }

        let gene_a = self.chromosome_a.gene(locus);
        let gene_b = self.chromosome_b.gene(locus);
        let expressed = if gene_a.is_dominant() {
            gene_a.dominant_expression()
        } else if gene_b.is_dominant() {
            gene_b.dominant_expression()
        } else {
            gene_b.recessive_expression()
        };

        self.phenotype.insert(locus, expressed);
        expressed
    }

    /// Gamete readout: every locus independently takes its allele from A or
    /// B. Two calls on the same genotype can differ.
    pub fn chromatin(&self, rng: &mut dyn RngCore) -> String {
        let symbols: Vec<String> = Locus::ALL
            .iter()
            .map(|&locus| {
                let source = if rng.gen_bool(0.5) {
                    &self.chromosome_a
                } else {
                    &self.chromosome_b
                };
                source.symbol(locus).to_string()
            })
            .collect();

        symbols.join(CHROMATIN_SEPARATOR)
    }

    /// Zygosity summary, e.g. `| shy|AGG|Int|cur |`.
    pub fn summary(&self) -> String {
        let loci: Vec<String> = Locus::ALL
            .iter()
            .map(|&locus| {
                let short: String = locus.name().chars().take(3).collect();
                let left = self.chromosome_a.gene(locus).is_dominant();
                let right = self.chromosome_b.gene(locus).is_dominant();
                match (left, right) {
                    (true, true) => short.to_uppercase(),
                    (false, false) => short,
                    _ => capitalize(&short),
                }
            })
            .collect();

        format!("| {} |", loci.join(CHROMATIN_SEPARATOR))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    fn genotype(a: &str, b: &str) -> Genotype {
        Genotype::from_chromosomes(
            Chromosome::from_chromatin(a).unwrap(),
            Chromosome::from_chromatin(b).unwrap(),
        )
    }

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[rstest]
    // A dominant wins
    #[case("D|D|D|D", "d|d|d|d", [false, true, false, false])]
    // B dominant is used when A is recessive
    #[case("d|d|d|d", "D|D|D|D", [false, true, false, false])]
    // both recessive falls back to B's recessive expression
    #[case("d|d|d|d", "d|d|d|d", [true, false, true, true])]
    #[case("D|d|d|D", "d|d|D|d", [false, false, false, false])]
    fn test_expression_rule(#[case] a: &str, #[case] b: &str, #[case] expected: [bool; 4]) {
        let mut g = genotype(a, b);
        for (locus, want) in Locus::ALL.iter().zip(expected) {
            assert_eq!(g.expressed_phenotype(*locus), want, "locus {locus}");
        }
    }

    #[rstest]
    fn test_expression_is_memoized(mut rng: StdRng) {
        let mut g = Genotype::random(&mut rng, 0.0);
        let first: Vec<bool> = Locus::ALL.iter().map(|&l| g.expressed_phenotype(l)).collect();
        for _ in 0..20 {
            let again: Vec<bool> = Locus::ALL.iter().map(|&l| g.expressed_phenotype(l)).collect();
            assert_eq!(first, again);
        }
        assert_eq!(g.phenotype.len(), Locus::ALL.len());
    }

    #[rstest]
    fn test_homozygous_chromatin_is_fixed(mut rng: StdRng) {
        let g = genotype("D|d|D|d", "D|d|D|d");
        for _ in 0..20 {
            assert_eq!(g.chromatin(&mut rng), "D|d|D|d");
        }
    }

    #[rstest]
    fn test_chromatin_draws_from_both_chromosomes(mut rng: StdRng) {
        let g = genotype("D|D|D|D", "d|d|d|d");
        let readouts: Vec<String> = (0..64).map(|_| g.chromatin(&mut rng)).collect();
        for chromatin in &readouts {
            let symbols: Vec<&str> = chromatin.split('|').collect();
            assert_eq!(symbols.len(), Locus::ALL.len());
        }
        // independent assortment, not a replay of either chromosome
        assert!(readouts.iter().any(|c| c != "D|D|D|D" && c != "d|d|d|d"));
    }

    #[rstest]
    fn test_inherit_has_one_allele_per_locus(mut rng: StdRng) {
        let mom = genotype("A|b|C|d", "a|B|c|D");
        let dad = genotype("D|d|D|d", "d|D|d|D");
        for _ in 0..50 {
            let child = Genotype::inherit(&mom, &dad, &mut rng, 0.1).unwrap();
            for slot in [ChromosomeSlot::A, ChromosomeSlot::B] {
                let chromatin = child.chromosome(slot).chromatin();
                assert_eq!(chromatin.split('|').count(), Locus::ALL.len());
            }
            // A comes from mom, B from dad, per locus
            for locus in Locus::ALL {
                let a = child.chromosome(ChromosomeSlot::A).symbol(locus);
                let b = child.chromosome(ChromosomeSlot::B).symbol(locus);
                assert!(a == mom.chromosome_a.symbol(locus) || a == mom.chromosome_b.symbol(locus));
                assert!(b == dad.chromosome_a.symbol(locus) || b == dad.chromosome_b.symbol(locus));
            }
        }
    }

    #[rstest]
    fn test_mutation_hook_keeps_genes(mut rng: StdRng) {
        let parent = genotype("D|d|D|d", "D|d|D|d");
        let child = Genotype::inherit(&parent, &parent, &mut rng, 1.0).unwrap();
        assert!(child.mutation_mark().is_some());
        assert_eq!(child.chromosome(ChromosomeSlot::A).chromatin(), "D|d|D|d");
        assert_eq!(child.chromosome(ChromosomeSlot::B).chromatin(), "D|d|D|d");

        let unmarked = Genotype::inherit(&parent, &parent, &mut rng, 0.0).unwrap();
        assert_eq!(unmarked.mutation_mark(), None);
    }

    #[test]
    fn test_summary_zygosity() {
        let g = genotype("D|D|d|d", "D|d|D|d");
        assert_eq!(g.summary(), "| SHY|Agg|Int|cur |");
    }
}
