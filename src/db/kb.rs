/*!
The knowledge base --- an append-only store of Horn clauses.

A knowledge base holds:
- An ordered vector of [Horn clauses](HornClause), in the order added.
- The set of all distinct atoms appearing in any clause (premise or conclusion).
- A [symbol database](crate::db::symbol) mapping external names to atoms.

# Invariants

The following invariant is always upheld:
<div class="warning">
The symbol set is exactly the union of atoms over all clauses, and is revised on every addition.
</div>

Clauses are never removed.
To explore alternative extensions of a knowledge base, branch it with [clone](Clone::clone): a clone duplicates the clause vector and symbol set by value, and mutating the clone never affects the original.

```rust
# use heron_search::db::kb::KnowledgeBase;
let mut kb = KnowledgeBase::default();

let a = kb.atom("a");
let b = kb.atom("b");

kb.fact(a);
kb.add([a], b);

let mut branch = kb.clone();
let c = branch.atom("c");
branch.add([b], c);

assert_eq!(kb.clause_count(), 2);
assert_eq!(branch.clause_count(), 3);
assert!(!kb.symbols().contains(&c));
```

# Notes

Atoms passed to [add](KnowledgeBase::add) are expected to come from this knowledge base's [atom](KnowledgeBase::atom) (or a knowledge base it was cloned from).
The reasoners size their internal vectors by [atom_bound](KnowledgeBase::atom_bound), which covers every interned atom and every atom mentioned in a clause.
*/

use std::collections::BTreeSet;

use crate::{
    db::symbol::SymbolDB,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::HornClause},
};

/// The knowledge base struct.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    /// The clauses of the knowledge base, in the order added.
    clauses: Vec<HornClause>,

    /// Every atom appearing in some clause.
    symbols: BTreeSet<Atom>,

    /// External names of atoms.
    symbol_db: SymbolDB,
}

impl KnowledgeBase {
    /// The atom named `name`, interned on first use.
    pub fn atom(&mut self, name: &str) -> Atom {
        self.symbol_db.intern(name)
    }

    /// The atom named `name`, if interned, without interning.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.symbol_db.atom_of(name)
    }

    /// The external name of `atom`, if any.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.symbol_db.name_of(atom)
    }

    /// Appends the clause `premise → conclusion` and unions its atoms into the symbol set.
    pub fn add(&mut self, premise: impl IntoIterator<Item = Atom>, conclusion: Atom) {
        let clause = HornClause::new(premise, conclusion);

        for atom in clause.atoms() {
            self.symbols.insert(atom);
        }

        log::trace!(target: targets::KNOWLEDGE, "Added clause {clause}.");
        self.clauses.push(clause);
    }

    /// Appends the fact `conclusion`, aka. a clause with an empty premise.
    pub fn fact(&mut self, conclusion: Atom) {
        self.add([], conclusion);
    }

    /// The clauses of the knowledge base, in the order added.
    pub fn clauses(&self) -> &[HornClause] {
        &self.clauses
    }

    /// The set of all atoms appearing in some clause.
    pub fn symbols(&self) -> &BTreeSet<Atom> {
        &self.symbols
    }

    /// A count of clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// One more than the largest atom known to the knowledge base.
    ///
    /// Covers every interned name and every atom mentioned in a clause, so a vector of this length may be indexed by any such atom.
    pub fn atom_bound(&self) -> usize {
        let interned = self.symbol_db.count();

        match self.symbols.last() {
            Some(largest) => interned.max(*largest as usize + 1),
            None => interned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_track_clauses() {
        let mut kb = KnowledgeBase::default();

        let p = kb.atom("p");
        let q = kb.atom("q");
        let r = kb.atom("r");

        kb.add([p, q], r);

        assert_eq!(kb.symbols(), &BTreeSet::from([p, q, r]));

        // Interned but clause-free atoms stay outside the symbol set.
        let s = kb.atom("s");
        assert!(!kb.symbols().contains(&s));
        assert_eq!(kb.atom_bound(), 4);
    }

    #[test]
    fn clones_are_independent() {
        let mut kb = KnowledgeBase::default();

        let p = kb.atom("p");
        kb.fact(p);

        let mut branch = kb.clone();
        let q = branch.atom("q");
        branch.add([p], q);

        assert_eq!(kb.clause_count(), 1);
        assert_eq!(branch.clause_count(), 2);
        assert_eq!(kb.symbols(), &BTreeSet::from([p]));
        assert_eq!(branch.symbols(), &BTreeSet::from([p, q]));
    }
}
