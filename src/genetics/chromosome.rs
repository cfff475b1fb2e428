use std::collections::BTreeMap;

use rand::{Rng, RngCore};

use super::gene::{Gene, Locus};
use super::CHROMATIN_SEPARATOR;
use crate::error::GeneticsError;

/// An ordered locus -> gene map with one gene per locus in `Locus::ALL`.
#[derive(Clone, Debug, PartialEq)]
pub struct Chromosome {
    genes: BTreeMap<Locus, Gene>,
}

impl Chromosome {
    /// Founder chromosome: each locus is dominant or recessive with even odds.
    pub fn random(rng: &mut dyn RngCore) -> Chromosome {
        let genes = Locus::ALL
            .iter()
            .map(|&locus| (locus, Gene::new(locus, rng.gen_bool(0.5))))
            .collect();

        Chromosome { genes }
    }

    /// Decodes a chromatin string such as `D|d|D|d`, one symbol per locus in
    /// locus order.
    pub fn from_chromatin(chromatin: &str) -> Result<Chromosome, GeneticsError> {
        let segments: Vec<&str> = chromatin.split(CHROMATIN_SEPARATOR).collect();
        if segments.len() != Locus::ALL.len() {
            return Err(GeneticsError::LocusCount {
                expected: Locus::ALL.len(),
                actual: segments.len(),
            });
        }

        let mut genes = BTreeMap::new();
        for (&locus, segment) in Locus::ALL.iter().zip(segments) {
            let mut chars = segment.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => c,
                _ => {
                    return Err(GeneticsError::MalformedAllele {
                        locus,
                        segment: segment.to_string(),
                    })
                }
            };
            genes.insert(locus, Gene::from_symbol(locus, symbol));
        }

        Ok(Chromosome { genes })
    }

    pub fn gene(&self, locus: Locus) -> &Gene {
        // every constructor fills all loci
        &self.genes[&locus]
    }

    pub fn symbol(&self, locus: Locus) -> char {
        self.gene(locus).symbol()
    }

    /// Serializes every allele back into chromatin form.
    pub fn chromatin(&self) -> String {
        let symbols: Vec<String> = self.genes.values().map(|g| g.symbol().to_string()).collect();
        symbols.join(CHROMATIN_SEPARATOR)
    }

    /// Hook for point mutations. Alleles are currently left untouched.
    pub fn mutate(&mut self) {}
}
