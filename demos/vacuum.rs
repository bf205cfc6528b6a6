//! The two-room vacuum world, searched three ways.
//!
//! Each search is made on a fresh context, and the plan, its length, and the
//! count of expansions are printed for comparison.

use heron_search::{
    config::Config,
    context::SearchContext,
    structures::problem::{Cost, Problem},
};

struct VacuumWorld {
    dirt: Vec<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct VacuumState {
    position: usize,
    dirty: Vec<bool>,
}

#[derive(Clone, Copy, Debug)]
enum VacuumAction {
    Suck,
    Right,
    Left,
}

impl Problem for VacuumWorld {
    type State = VacuumState;
    type Action = VacuumAction;

    fn initial_state(&self) -> VacuumState {
        VacuumState {
            position: 0,
            dirty: self.dirt.clone(),
        }
    }

    fn actions(&self, _state: &VacuumState) -> Vec<VacuumAction> {
        vec![VacuumAction::Suck, VacuumAction::Right, VacuumAction::Left]
    }

    fn act(&self, state: &VacuumState, action: &VacuumAction) -> VacuumState {
        let mut successor = state.clone();

        match action {
            VacuumAction::Suck => successor.dirty[state.position] = false,
            VacuumAction::Right => {
                successor.position = (state.position + 1).min(self.dirt.len() - 1)
            }
            VacuumAction::Left => successor.position = state.position.saturating_sub(1),
        }

        successor
    }

    fn is_goal(&self, state: &VacuumState) -> bool {
        !state.dirty.iter().any(|room| *room)
    }

    fn heuristic(&self, state: &VacuumState) -> Cost {
        state.dirty.iter().filter(|room| **room).count() as Cost
    }
}

fn main() {
    let searches: [(&str, fn(&mut SearchContext<VacuumWorld>)); 3] = [
        ("breadth_first", |ctx| {
            ctx.breadth_first().expect("search failed");
        }),
        ("depth_first", |ctx| {
            ctx.depth_first().expect("search failed");
        }),
        ("astar", |ctx| {
            ctx.astar().expect("search failed");
        }),
    ];

    for (name, search) in searches {
        let world = VacuumWorld {
            dirt: vec![true, true],
        };
        let mut ctx = SearchContext::from_config(world, Config::default());

        search(&mut ctx);

        println!("{name}: {}", ctx.report());
        match ctx.the_plan() {
            Ok(plan) => println!(
                "  plan {:?} ({} actions, {} expansions)",
                plan,
                plan.len(),
                ctx.counters.expansions
            ),
            Err(_) => println!("  no plan ({} expansions)", ctx.counters.expansions),
        }
    }
}
