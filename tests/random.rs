//! Randomized cross-checks, on fixed seeds for reproducibility.
//!
//! The engines implement the same contracts by different strategies, so on any
//! instance their conclusions must line up: breadth-first and A* on plan cost
//! under unit actions, and forward and backward chaining on every atom.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use heron_search::{
    config::Config,
    context::SearchContext,
    db::kb::KnowledgeBase,
    procedures::{BackwardChaining, ForwardChaining},
    reports::Report,
    structures::{
        plan::{apply_plan, plan_cost},
        problem::{Cost, Problem},
    },
};

/// A rectangular grid with blocked cells and unit moves.
struct Grid {
    width: usize,
    height: usize,
    open: Vec<bool>,
    goal: (usize, usize),
    informed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    North,
    East,
    South,
    West,
}

impl Grid {
    fn cell_open(&self, column: isize, row: isize) -> bool {
        0 <= column
            && column < self.width as isize
            && 0 <= row
            && row < self.height as isize
            && self.open[row as usize * self.width + column as usize]
    }

    fn shift(position: (usize, usize), step: Move) -> (isize, isize) {
        let (column, row) = (position.0 as isize, position.1 as isize);

        match step {
            Move::North => (column, row - 1),
            Move::East => (column + 1, row),
            Move::South => (column, row + 1),
            Move::West => (column - 1, row),
        }
    }
}

impl Problem for Grid {
    type State = (usize, usize);
    type Action = Move;

    fn initial_state(&self) -> (usize, usize) {
        (0, 0)
    }

    fn actions(&self, state: &(usize, usize)) -> Vec<Move> {
        [Move::North, Move::East, Move::South, Move::West]
            .into_iter()
            .filter(|step| {
                let (column, row) = Grid::shift(*state, *step);
                self.cell_open(column, row)
            })
            .collect()
    }

    fn act(&self, state: &(usize, usize), action: &Move) -> (usize, usize) {
        let (column, row) = Grid::shift(*state, *action);
        assert!(
            self.cell_open(column, row),
            "Action {action:?} is not available in state {state:?}"
        );

        (column as usize, row as usize)
    }

    fn is_goal(&self, state: &(usize, usize)) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &(usize, usize)) -> Cost {
        match self.informed {
            true => {
                let columns = state.0.abs_diff(self.goal.0);
                let rows = state.1.abs_diff(self.goal.1);
                (columns + rows) as Cost
            }
            false => 0.0,
        }
    }
}

fn random_grid(rng: &mut SmallRng, informed: bool) -> Grid {
    let width = 8;
    let height = 8;

    let mut open: Vec<bool> = (0..width * height)
        .map(|_| rng.random_range(0..4) != 0)
        .collect();

    // The corners are kept open so the instance is well-formed.
    open[0] = true;
    open[width * height - 1] = true;

    Grid {
        width,
        height,
        open,
        goal: (width - 1, height - 1),
        informed,
    }
}

#[test]
fn grids_agree_on_plan_cost() {
    for seed in 0..24 {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut uniform = SearchContext::from_config(random_grid(&mut rng, false), Config::default());
        let uniform_report = uniform.breadth_first().unwrap();

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut informed = SearchContext::from_config(random_grid(&mut rng, true), Config::default());
        let informed_report = informed.astar().unwrap();

        assert_eq!(uniform_report, informed_report, "seed {seed}");

        if uniform_report == Report::PlanFound {
            let fewest = uniform.the_plan().unwrap().len() as Cost;
            let cheapest = plan_cost(&informed.problem, informed.the_plan().unwrap());

            assert_eq!(fewest, cheapest, "seed {seed}");
            assert_eq!(
                apply_plan(&informed.problem, informed.the_plan().unwrap()),
                informed.problem.goal,
                "seed {seed}"
            );

            // The estimate never increases the expansion count past uniform cost.
            let mut blind = SearchContext::from_config(
                {
                    let mut rng = SmallRng::seed_from_u64(seed);
                    random_grid(&mut rng, false)
                },
                Config::default(),
            );
            assert_eq!(blind.astar(), Ok(Report::PlanFound), "seed {seed}");
            assert_eq!(
                plan_cost(&blind.problem, blind.the_plan().unwrap()),
                cheapest,
                "seed {seed}"
            );
            assert!(
                informed.counters.expansions <= blind.counters.expansions,
                "seed {seed}"
            );
        }
    }
}

fn random_kb(rng: &mut SmallRng) -> KnowledgeBase {
    let mut kb = KnowledgeBase::default();

    let atoms: Vec<_> = (0..12)
        .map(|index| kb.atom(&format!("s{index}")))
        .collect();

    for _ in 0..20 {
        let conclusion = atoms[rng.random_range(0..atoms.len())];
        let premise_size = rng.random_range(0..=3);
        let premise: Vec<_> = (0..premise_size)
            .map(|_| atoms[rng.random_range(0..atoms.len())])
            .collect();

        kb.add(premise, conclusion);
    }

    kb
}

#[test]
fn random_bases_agree_on_entailment() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let kb = random_kb(&mut rng);

        let forward = ForwardChaining::new(&kb);
        let mut backward = BackwardChaining::new(&kb);

        for &atom in kb.symbols() {
            assert_eq!(forward.query(atom), backward.query(atom), "seed {seed}");
        }

        // Agreement is insensitive to the order atoms are queried in.
        let mut reversed = BackwardChaining::new(&kb);
        for &atom in kb.symbols().iter().rev() {
            assert_eq!(forward.query(atom), reversed.query(atom), "seed {seed}");
        }
    }
}
