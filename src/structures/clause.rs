//! Horn clauses, aka. a conjunctive premise of atoms paired with a single conclusion atom.
//!
//! The canonical representation of a premise is as a vector of distinct atoms, in the order given.
//!
//! ```rust
//! # use heron_search::structures::clause::HornClause;
//! let clause = HornClause::new([3, 15, 3, 41], 7);
//!
//! assert_eq!(clause.premise(), &[3, 15, 41]);
//! assert_eq!(clause.conclusion(), 7);
//! assert!(!clause.is_fact());
//! ```
//!
//! - A clause with an empty premise asserts its conclusion unconditionally (a 'fact').
//! - The conclusion is always exactly one atom --- there is no representation of a clause with more atoms on the right-hand side.

use crate::structures::atom::Atom;

/// A Horn clause: a premise of distinct atoms, read conjunctively, and a single conclusion atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HornClause {
    /// The premise of the clause, deduplicated, in the order given at construction.
    premise: Vec<Atom>,

    /// The conclusion of the clause.
    conclusion: Atom,
}

impl HornClause {
    /// A clause from the given premise and conclusion.
    ///
    /// Repeated premise atoms are dropped, with the first occurrence fixing the order.
    /// Premises are expected to be small, so deduplication is by linear scan.
    pub fn new(premise: impl IntoIterator<Item = Atom>, conclusion: Atom) -> Self {
        let mut distinct: Vec<Atom> = Vec::default();

        for atom in premise {
            if !distinct.contains(&atom) {
                distinct.push(atom);
            }
        }

        HornClause {
            premise: distinct,
            conclusion,
        }
    }

    /// The premise of the clause, as a slice of distinct atoms.
    pub fn premise(&self) -> &[Atom] {
        &self.premise
    }

    /// The conclusion of the clause.
    pub fn conclusion(&self) -> Atom {
        self.conclusion
    }

    /// True if the premise is empty, false otherwise.
    pub fn is_fact(&self) -> bool {
        self.premise.is_empty()
    }

    /// An iterator over all atoms in the clause, premise first, conclusion last.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.premise
            .iter()
            .copied()
            .chain(std::iter::once(self.conclusion))
    }

    /// The number of atoms in the premise.
    pub fn premise_size(&self) -> usize {
        self.premise.len()
    }
}

impl std::fmt::Display for HornClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.premise.split_first() {
            None => write!(f, "⊤ → {}", self.conclusion),

            Some((first, rest)) => {
                write!(f, "{first}")?;
                for atom in rest {
                    write!(f, " ∧ {atom}")?;
                }
                write!(f, " → {}", self.conclusion)
            }
        }
    }
}
