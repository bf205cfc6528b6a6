//! Horn-clause entailment, chained forwards and backwards.
//!
//! Builds the textbook base {p→q, l∧m→p, b∧l→m, a∧p→l, a∧b→l, x→w, a, b} and
//! asks both reasoners the same questions.

use heron_search::{
    db::kb::KnowledgeBase,
    procedures::{BackwardChaining, ForwardChaining},
};

fn main() {
    let mut kb = KnowledgeBase::default();

    let a = kb.atom("a");
    let b = kb.atom("b");
    let l = kb.atom("l");
    let m = kb.atom("m");
    let p = kb.atom("p");
    let q = kb.atom("q");
    let w = kb.atom("w");
    let x = kb.atom("x");

    kb.add([p], q);
    kb.add([l, m], p);
    kb.add([b, l], m);
    kb.add([a, p], l);
    kb.add([a, b], l);
    kb.add([x], w);
    kb.fact(a);
    kb.fact(b);

    println!("clauses:");
    for clause in kb.clauses() {
        println!("  {clause}");
    }

    let forward = ForwardChaining::new(&kb);

    let entailed: Vec<_> = forward
        .entailed_atoms()
        .filter_map(|atom| kb.name_of(atom))
        .collect();
    println!("forward chaining entails: {entailed:?}");

    let mut backward = BackwardChaining::new(&kb);

    for atom in [a, q, w] {
        let name = kb.name_of(atom).expect("named atom");
        println!(
            "backward chaining: {name} is {}",
            match backward.query(atom) {
                true => "entailed",
                false => "not entailed",
            }
        );
    }
}
