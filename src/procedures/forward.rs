/*!
Forward chaining --- bottom-up materialization of every atom entailed by a knowledge base.

See [ForwardChaining] for the reasoner.

# Overview

The count-based fixpoint: every clause tracks a count of premise atoms not yet known to be entailed, and an agenda holds atoms known to be entailed but not yet processed.
Seeded with the conclusions of the facts, the agenda is drained one atom at a time --- each drained atom decrements the count of every clause whose premise mentions it, and a clause whose count reaches zero schedules its conclusion (unless already scheduled).

The mechanics mirror watched-clause propagation: each atom carries a list of the clauses whose premise mentions it, so draining an atom touches only the clauses it can advance.

# Termination

Each atom is scheduled at most once, and each clause count is decremented at most once per distinct premise atom.
Total work is bounded by the sum of premise sizes, with no separate cycle guard required --- the counts inherently prevent reprocessing.

# Guarantees

Sound and complete for Horn-clause entailment: the materialized set is exactly the minimal model (least fixpoint) of the knowledge base.
*/

use std::collections::VecDeque;

use crate::{
    db::{kb::KnowledgeBase, ClauseIndex},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A forward chaining reasoner, holding every atom entailed by the knowledge base it was built from.
///
/// The full entailed set is computed once, at construction.
/// Queries are membership tests against the materialized set.
///
/// ```rust
/// # use heron_search::db::kb::KnowledgeBase;
/// # use heron_search::procedures::ForwardChaining;
/// let mut kb = KnowledgeBase::default();
///
/// let p = kb.atom("p");
/// let q = kb.atom("q");
///
/// kb.fact(p);
/// kb.add([p], q);
///
/// let forward = ForwardChaining::new(&kb);
///
/// assert!(forward.query(p));
/// assert!(forward.query(q));
/// ```
pub struct ForwardChaining {
    /// Whether each atom is entailed, indexed by atom.
    entailed: Vec<bool>,
}

impl ForwardChaining {
    /// Builds the reasoner for `kb` by running the count-based fixpoint to exhaustion.
    pub fn new(kb: &KnowledgeBase) -> Self {
        let bound = kb.atom_bound();

        let mut entailed = vec![false; bound];
        let mut scheduled = vec![false; bound];

        // The count of premise atoms of each clause not yet drained from the agenda.
        let mut remaining: Vec<usize> = kb
            .clauses()
            .iter()
            .map(|clause| clause.premise_size())
            .collect();

        // For each atom, the clauses whose premise mentions it.
        // As premises hold distinct atoms, each clause appears at most once per atom.
        let mut mentions: Vec<Vec<ClauseIndex>> = vec![Vec::default(); bound];
        for (index, clause) in kb.clauses().iter().enumerate() {
            for atom in clause.premise() {
                mentions[*atom as usize].push(index as ClauseIndex);
            }
        }

        let mut agenda: VecDeque<Atom> = VecDeque::default();

        for clause in kb.clauses() {
            if clause.is_fact() && !scheduled[clause.conclusion() as usize] {
                scheduled[clause.conclusion() as usize] = true;
                agenda.push_back(clause.conclusion());
            }
        }

        while let Some(atom) = agenda.pop_front() {
            entailed[atom as usize] = true;
            log::trace!(target: targets::AGENDA, "Drained atom {atom}.");

            for clause_index in &mentions[atom as usize] {
                let index = *clause_index as usize;
                remaining[index] -= 1;

                if remaining[index] == 0 {
                    let conclusion = kb.clauses()[index].conclusion();

                    if !scheduled[conclusion as usize] {
                        scheduled[conclusion as usize] = true;
                        agenda.push_back(conclusion);
                        log::trace!(target: targets::AGENDA, "Scheduled atom {conclusion} from clause {index}.");
                    }
                }
            }
        }

        ForwardChaining { entailed }
    }

    /// True if `atom` is entailed by the knowledge base the reasoner was built from, false otherwise.
    ///
    /// An atom never mentioned in the knowledge base is trivially false.
    pub fn query(&self, atom: Atom) -> bool {
        self.entailed.get(atom as usize).copied().unwrap_or(false)
    }

    /// An iterator over every entailed atom.
    pub fn entailed_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.entailed
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.then_some(index as Atom))
    }
}
