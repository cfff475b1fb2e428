use std::fmt;

/// A named genetic slot. Every chromosome carries exactly one gene per locus,
/// always in the order of `Locus::ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locus {
    Shy,
    Aggression,
    Intelligence,
    Curiosity,
}

/// Phenotype values produced by an allele, depending on which form it takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expressions {
    pub dominant: bool,
    pub recessive: bool,
}

// shy, intelligence and curiosity only show when homozygous recessive,
// aggression is carried by the dominant allele
const LOCUS_TABLE: [(Locus, &str, Expressions); 4] = [
    (Locus::Shy, "shy", Expressions { dominant: false, recessive: true }),
    (Locus::Aggression, "aggression", Expressions { dominant: true, recessive: false }),
    (Locus::Intelligence, "intelligence", Expressions { dominant: false, recessive: true }),
    (Locus::Curiosity, "curiosity", Expressions { dominant: false, recessive: true }),
];

impl Locus {
    /// Fixed locus order used by chromosomes and chromatin strings.
    pub const ALL: [Locus; 4] = [
        Locus::Shy,
        Locus::Aggression,
        Locus::Intelligence,
        Locus::Curiosity,
    ];

    fn entry(self) -> &'static (Locus, &'static str, Expressions) {
        &LOCUS_TABLE[self.index()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn expressions(self) -> Expressions {
        self.entry().2
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One allele sitting at a locus. Immutable once built.
///
/// The allele symbol doubles as its serialized form: an upper-case symbol is
/// dominant, anything else is recessive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gene {
    locus: Locus,
    symbol: char,
    dominant: bool,
    expressions: Expressions,
}

impl Gene {
    pub fn from_symbol(locus: Locus, symbol: char) -> Gene {
        Gene {
            locus,
            symbol,
            dominant: symbol.is_uppercase(),
            expressions: locus.expressions(),
        }
    }

    /// Shorthand for the canonical `D`/`d` alphabet used by founders.
    pub fn new(locus: Locus, dominant: bool) -> Gene {
        Gene::from_symbol(locus, if dominant { 'D' } else { 'd' })
    }

    pub fn locus(&self) -> Locus {
        self.locus
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_dominant(&self) -> bool {
        self.dominant
    }

    pub fn is_recessive(&self) -> bool {
        !self.dominant
    }

    pub fn dominant_expression(&self) -> bool {
        self.expressions.dominant
    }

    pub fn recessive_expression(&self) -> bool {
        self.expressions.recessive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('D', true)]
    #[case('d', false)]
    #[case('A', true)]
    #[case('x', false)]
    fn test_dominance_from_case(#[case] symbol: char, #[case] dominant: bool) {
        let gene = Gene::from_symbol(Locus::Curiosity, symbol);
        assert_eq!(gene.is_dominant(), dominant);
        assert_eq!(gene.is_recessive(), !dominant);
        assert_eq!(gene.symbol(), symbol);
    }

    #[test]
    fn test_aggression_is_inverted() {
        for locus in [Locus::Shy, Locus::Intelligence, Locus::Curiosity] {
            let gene = Gene::new(locus, true);
            assert!(!gene.dominant_expression());
            assert!(gene.recessive_expression());
        }

        let aggressive = Gene::new(Locus::Aggression, false);
        assert!(aggressive.dominant_expression());
        assert!(!aggressive.recessive_expression());
    }

    #[test]
    fn test_locus_registry() {
        for (i, locus) in Locus::ALL.iter().enumerate() {
            assert_eq!(locus.index(), i);
            // table rows line up with the enum order
            assert_eq!(LOCUS_TABLE[i].0, *locus);
        }
        assert_eq!(Locus::Intelligence.to_string(), "intelligence");
    }
}
