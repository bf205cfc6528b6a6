/*!
(The internal representation of) an atom (aka. a propositional variable).

Broadly, atoms are things with a name whose entailment by a collection of clauses is of interest.
- 'Internal' atoms are used internal to a knowledge base and its reasoners.
- 'External' atoms are used during external interaction with a knowledge base, e.g. when writing a clause or reading a query result. \
     External atoms are strings of non-whitespace characters. \
     Examples: `p`, `wet_grass`, `96`.

Each (internal) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That is, the atoms are [0..*m*) for some *m*.

This representation allows atoms to be used as the indices of a structure, e.g. `entailed[a]`, without taking too much space.
Revising the representation to any unsigned integer is possible.

# Notes
- The external representation of an atom is stored in the [symbol database](crate::db::symbol).
- In the logic literature these are often called 'atoms' while elsewhere they are often called 'symbols' or 'variables'.
*/

/// An atom, aka. a propositional variable.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
