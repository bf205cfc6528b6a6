/*!
Backward chaining --- top-down, goal-directed proof of single atoms.

See [BackwardChaining] for the reasoner.

# Overview

To prove an atom, try each clause concluding it, in the order the clauses were added.
A clause succeeds when every premise atom is (recursively) proved, short-circuiting on the first premise which is not; the atom is proved by the first clause which succeeds, and no further clauses are tried.

# The cycle guard

Clauses may depend on one another cyclically (`p → q` and `q → p`), and a naive reduction would recurse forever.
Every atom currently being proved is marked *in progress*: a query for an in-progress atom is treated as not-yet-provable along that path, and the reduction moves to the next premise or clause.
A cyclic dependency is therefore resolved transparently --- it is not an error, and never manifests as unbounded recursion.

# The memo

Results are cached in a tri-state map (unknown, true, false), seeded at construction with every fact.

A success is always cached: Horn logic has no negation, so a derivation, once found, cannot depend on the guard having cut a branch.
A failure is cached only when *settled* --- when no branch of the reduction was cut by the in-progress guard.
An unsettled failure may be an artefact of the guard (the same atom may be provable when it is not itself the goal under reduction), so it is reported for the branch at hand and recomputed on later queries.

# Guarantees

Sound and complete for Horn-clause entailment --- agreeing with [ForwardChaining](crate::procedures::ForwardChaining) on every atom --- with recursion bounded by the count of atoms (every path holds distinct in-progress atoms).
*/

use crate::{
    db::{kb::KnowledgeBase, ClauseIndex},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A backward chaining reasoner over a knowledge base.
///
/// Queries are goal-directed: only the clauses relevant to the queried atom (and, recursively, its premises) are examined.
/// The memo persists across queries for the lifetime of the reasoner, so repeated queries sharpen to lookups.
///
/// ```rust
/// # use heron_search::db::kb::KnowledgeBase;
/// # use heron_search::procedures::BackwardChaining;
/// let mut kb = KnowledgeBase::default();
///
/// let p = kb.atom("p");
/// let q = kb.atom("q");
///
/// kb.fact(p);
/// kb.add([p], q);
///
/// let mut backward = BackwardChaining::new(&kb);
///
/// assert!(backward.query(q));
/// assert!(backward.query(p));
/// ```
pub struct BackwardChaining<'kb> {
    /// The knowledge base queried.
    kb: &'kb KnowledgeBase,

    /// The tri-state memo: unknown (None), or a settled result (Some), indexed by atom.
    memo: Vec<Option<bool>>,

    /// Whether each atom is currently being proved, indexed by atom.
    in_progress: Vec<bool>,

    /// For each atom, the clauses concluding it, in the order added.
    concluders: Vec<Vec<ClauseIndex>>,
}

impl<'kb> BackwardChaining<'kb> {
    /// Builds the reasoner for `kb`, seeding the memo with every fact.
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        let bound = kb.atom_bound();

        let mut memo = vec![None; bound];
        let mut concluders: Vec<Vec<ClauseIndex>> = vec![Vec::default(); bound];

        for (index, clause) in kb.clauses().iter().enumerate() {
            concluders[clause.conclusion() as usize].push(index as ClauseIndex);

            if clause.is_fact() {
                memo[clause.conclusion() as usize] = Some(true);
            }
        }

        BackwardChaining {
            kb,
            memo,
            in_progress: vec![false; bound],
            concluders,
        }
    }

    /// True if `atom` is entailed by the knowledge base, false otherwise.
    ///
    /// An atom never mentioned in the knowledge base is trivially false.
    pub fn query(&mut self, atom: Atom) -> bool {
        let (value, _settled) = self.prove(atom);
        value
    }

    /// Attempts to prove `atom`, returning the value paired with whether the value is settled.
    ///
    /// An unsettled value had some branch of its reduction cut by the in-progress guard, and is not cached --- see the [module documentation](crate::procedures::backward).
    fn prove(&mut self, atom: Atom) -> (bool, bool) {
        let index = atom as usize;

        // Atoms outside the knowledge base have no concluding clause.
        if index >= self.memo.len() {
            return (false, true);
        }

        if let Some(value) = self.memo[index] {
            return (value, true);
        }

        if self.in_progress[index] {
            log::trace!(target: targets::CHAINING, "Guarded cyclic query for atom {atom}.");
            return (false, false);
        }

        self.in_progress[index] = true;

        // A copy of the reference, so borrows of clauses are independent of the recursion.
        let kb = self.kb;

        let mut proved = false;
        let mut settled = true;

        // Indexed loops over concluders, as each recursive call may revise the memo.
        'concluder_loop: for position in 0..self.concluders[index].len() {
            let clause_index = self.concluders[index][position] as usize;
            let clause = &kb.clauses()[clause_index];

            let mut holds = true;

            for &condition in clause.premise() {
                let (value, condition_settled) = self.prove(condition);
                settled &= condition_settled;

                if !value {
                    holds = false;
                    break;
                }
            }

            if holds {
                proved = true;
                break 'concluder_loop;
            }
        }

        self.in_progress[index] = false;

        match proved {
            true => {
                // A derivation was found, and derivations do not rest on guarded branches.
                self.memo[index] = Some(true);
                (true, true)
            }

            false => {
                if settled {
                    self.memo[index] = Some(false);
                }
                (false, settled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_and_rules() {
        let mut kb = KnowledgeBase::default();
        let p = kb.atom("p");
        let q = kb.atom("q");
        let r = kb.atom("r");

        kb.fact(p);
        kb.add([p], q);

        let mut backward = BackwardChaining::new(&kb);

        assert!(backward.query(p));
        assert!(backward.query(q));
        assert!(!backward.query(r));
    }

    #[test]
    fn pure_cycle_fails_finitely() {
        let mut kb = KnowledgeBase::default();
        let p = kb.atom("p");
        let q = kb.atom("q");

        kb.add([p], q);
        kb.add([q], p);

        let mut backward = BackwardChaining::new(&kb);

        assert!(!backward.query(p));
        assert!(!backward.query(q));
    }

    #[test]
    fn guarded_failure_is_not_cached() {
        // Querying a first walks the cycle a → b → a before a's second clause
        // succeeds. The failure recorded for b along the cut branch must not
        // survive, as b follows from a.
        let mut kb = KnowledgeBase::default();
        let a = kb.atom("a");
        let b = kb.atom("b");
        let c = kb.atom("c");

        kb.add([b], a);
        kb.add([c], a);
        kb.add([a], b);
        kb.fact(c);

        let mut backward = BackwardChaining::new(&kb);

        assert!(backward.query(a));
        assert!(backward.query(b));
    }
}
