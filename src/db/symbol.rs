/*!
The symbol database --- the external representation of atoms.

Atoms are [u32 indices](crate::structures::atom) internally, and strings externally.
The symbol database holds the mapping in both directions: a vector of names indexed by atom, and a map from name to atom.

Interning is idempotent: the same name always returns the same atom, and a fresh name receives the next free index.

```rust
# use heron_search::db::symbol::SymbolDB;
let mut symbols = SymbolDB::default();

let p = symbols.intern("p");
assert_eq!(p, symbols.intern("p"));

assert_eq!(symbols.name_of(p), Some("p"));
assert_eq!(symbols.atom_of("q"), None);
```
*/

use std::collections::HashMap;

use crate::structures::atom::Atom;

/// The symbol database struct.
#[derive(Clone, Debug, Default)]
pub struct SymbolDB {
    /// External names, indexed by atom.
    names: Vec<String>,

    /// The atom of each external name.
    index_of: HashMap<String, Atom>,
}

impl SymbolDB {
    /// The atom of `name`, interning `name` with a fresh atom if required.
    pub fn intern(&mut self, name: &str) -> Atom {
        match self.index_of.get(name) {
            Some(atom) => *atom,

            None => {
                let atom = self.names.len() as Atom;
                self.names.push(name.to_owned());
                self.index_of.insert(name.to_owned(), atom);
                atom
            }
        }
    }

    /// The atom of `name`, if `name` has been interned.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.index_of.get(name).copied()
    }

    /// The external name of `atom`, if `atom` was created by this database.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(String::as_str)
    }

    /// A count of interned names.
    pub fn count(&self) -> usize {
        self.names.len()
    }
}
