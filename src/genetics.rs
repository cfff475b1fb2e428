//! Diploid inheritance: loci and their alleles, chromosomes that carry one
//! allele per locus, and genotypes that pair two chromosomes and express
//! phenotypes from them.

pub mod chromosome;
pub mod gene;
pub mod genotype;

pub use chromosome::Chromosome;
pub use gene::{Gene, Locus};
pub use genotype::{ChromosomeSlot, Genotype};

/// Separator between allele symbols in a chromatin string.
pub const CHROMATIN_SEPARATOR: &str = "|";
