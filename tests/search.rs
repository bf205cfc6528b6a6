use heron_search::{
    config::Config,
    context::SearchContext,
    reports::Report,
    structures::{
        plan::{apply_plan, plan_cost},
        problem::{Cost, Problem},
    },
    types::err::ConfigError,
};

/// A small explicit graph: arcs are listed per state in a fixed order, and an
/// action is the position of an arc in the enumeration of its source state.
struct GraphProblem {
    arcs: Vec<Vec<(usize, Cost)>>,
    estimates: Vec<Cost>,
    goals: Vec<usize>,
}

impl Problem for GraphProblem {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> usize {
        0
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        (0..self.arcs[*state].len()).collect()
    }

    fn act(&self, state: &usize, action: &usize) -> usize {
        match self.arcs[*state].get(*action) {
            Some((target, _)) => *target,
            None => panic!("Action {action} is not available in state {state}"),
        }
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals.contains(state)
    }

    fn action_cost(&self, state: &usize, action: &usize) -> Cost {
        self.arcs[*state][*action].1
    }

    fn heuristic(&self, state: &usize) -> Cost {
        self.estimates[*state]
    }
}

mod uninformed {
    use super::*;

    #[test]
    fn bfs_finds_fewest_actions() {
        // The four-step path to the goal is enumerated before the two-step path.
        let problem = GraphProblem {
            arcs: vec![
                vec![(1, 1.0), (5, 1.0)],
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                vec![(4, 1.0)],
                vec![],
                vec![(4, 1.0)],
            ],
            estimates: vec![0.0; 6],
            goals: vec![4],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.breadth_first(), Ok(Report::PlanFound));

        let plan = ctx.the_plan().unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(apply_plan(&ctx.problem, plan), 4);
    }

    #[test]
    fn dfs_terminates_on_cycles() {
        let problem = GraphProblem {
            arcs: vec![vec![(1, 1.0)], vec![(0, 1.0), (2, 1.0)], vec![]],
            estimates: vec![0.0; 3],
            goals: vec![2],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.depth_first(), Ok(Report::PlanFound));

        let plan = ctx.the_plan().unwrap();
        assert_eq!(apply_plan(&ctx.problem, plan), 2);
        assert_eq!(ctx.counters.depth_clips, 0);
    }

    #[test]
    fn dfs_follows_enumeration_order() {
        // Both successors are goals, and the first enumerated wins.
        let problem = GraphProblem {
            arcs: vec![vec![(1, 1.0), (2, 1.0)], vec![], vec![]],
            estimates: vec![0.0; 3],
            goals: vec![2, 1],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.depth_first(), Ok(Report::PlanFound));
        assert_eq!(ctx.the_plan().unwrap(), &vec![0]);
        assert_eq!(apply_plan(&ctx.problem, ctx.the_plan().unwrap()), 1);
    }

    #[test]
    fn dfs_depth_limit_clips() {
        // A five-action chain, against a three-action limit.
        let problem = GraphProblem {
            arcs: vec![
                vec![(1, 1.0)],
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                vec![(4, 1.0)],
                vec![(5, 1.0)],
                vec![],
            ],
            estimates: vec![0.0; 6],
            goals: vec![5],
        };

        let mut config = Config::default();
        assert_eq!(
            config.depth_limit.set_value(0),
            Err(ConfigError::OutsideBounds)
        );
        assert!(config.depth_limit.set_value(3).is_ok());

        let mut ctx = SearchContext::from_config(problem, config);

        assert_eq!(ctx.depth_first(), Ok(Report::NoPlan));
        assert!(ctx.counters.depth_clips > 0);

        // With enough depth the plan is found.
        assert!(ctx.config.depth_limit.set_value(10).is_ok());
        assert_eq!(ctx.depth_first(), Ok(Report::PlanFound));
        assert_eq!(ctx.the_plan().unwrap().len(), 5);
        assert_eq!(ctx.counters.depth_clips, 0);
    }

    #[test]
    fn frontier_starves_without_a_goal() {
        let problem = GraphProblem {
            arcs: vec![vec![]],
            estimates: vec![0.0],
            goals: vec![1],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.breadth_first(), Ok(Report::NoPlan));
        assert_eq!(ctx.depth_first(), Ok(Report::NoPlan));
        assert_eq!(ctx.counters.depth_clips, 0);
        assert_eq!(ctx.astar(), Ok(Report::NoPlan));

        assert!(ctx.the_plan().is_err());
    }
}

mod informed {
    use super::*;

    fn weighted() -> GraphProblem {
        // Two routes to the goal: cost 6 through state 1, cost 4 through state 2.
        GraphProblem {
            arcs: vec![
                vec![(1, 1.0), (2, 2.0)],
                vec![(3, 5.0)],
                vec![(3, 2.0)],
                vec![],
            ],
            estimates: vec![3.0, 4.0, 1.0, 0.0],
            goals: vec![3],
        }
    }

    #[test]
    fn astar_is_cost_optimal() {
        let mut ctx = SearchContext::from_config(weighted(), Config::default());

        assert_eq!(ctx.astar(), Ok(Report::PlanFound));

        let plan = ctx.the_plan().unwrap();
        assert_eq!(plan_cost(&ctx.problem, plan), 4.0);
        assert_eq!(apply_plan(&ctx.problem, plan), 3);
    }

    #[test]
    fn astar_completes_under_an_inadmissible_heuristic() {
        let mut problem = weighted();
        // Wild overestimates everywhere except the goal.
        problem.estimates = vec![100.0, 100.0, 100.0, 0.0];

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.astar(), Ok(Report::PlanFound));
        assert_eq!(apply_plan(&ctx.problem, ctx.the_plan().unwrap()), 3);
    }

    #[test]
    fn astar_relaxes_to_the_cheaper_route() {
        // The dear route to state 2 is discovered first, then relaxed.
        let problem = GraphProblem {
            arcs: vec![
                vec![(1, 1.0), (2, 10.0)],
                vec![(2, 1.0)],
                vec![(3, 1.0)],
                vec![],
            ],
            estimates: vec![0.0; 4],
            goals: vec![3],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.astar(), Ok(Report::PlanFound));
        assert_eq!(plan_cost(&ctx.problem, ctx.the_plan().unwrap()), 3.0);
    }
}

mod edges {
    use super::*;

    fn goal_at_origin() -> GraphProblem {
        GraphProblem {
            arcs: vec![vec![(1, 1.0)], vec![]],
            estimates: vec![0.0; 2],
            goals: vec![0],
        }
    }

    #[test]
    fn immediate_goal_costs_no_expansions() {
        let mut ctx = SearchContext::from_config(goal_at_origin(), Config::default());

        assert_eq!(ctx.breadth_first(), Ok(Report::PlanFound));
        assert!(ctx.the_plan().unwrap().is_empty());
        assert_eq!(ctx.counters.expansions, 0);

        assert_eq!(ctx.depth_first(), Ok(Report::PlanFound));
        assert!(ctx.the_plan().unwrap().is_empty());
        assert_eq!(ctx.counters.expansions, 0);

        assert_eq!(ctx.astar(), Ok(Report::PlanFound));
        assert!(ctx.the_plan().unwrap().is_empty());
        assert_eq!(ctx.counters.expansions, 0);
    }

    #[test]
    fn counters_describe_the_latest_search() {
        let problem = GraphProblem {
            arcs: vec![vec![(1, 1.0)], vec![(2, 1.0)], vec![]],
            estimates: vec![0.0; 3],
            goals: vec![2],
        };

        let mut ctx = SearchContext::from_config(problem, Config::default());

        assert_eq!(ctx.breadth_first(), Ok(Report::PlanFound));
        let bfs_expansions = ctx.counters.expansions;
        assert!(bfs_expansions > 0);

        assert_eq!(ctx.astar(), Ok(Report::PlanFound));
        assert!(ctx.counters.expansions <= bfs_expansions);
    }

    #[test]
    #[should_panic]
    fn unlisted_actions_are_a_contract_violation() {
        let problem = goal_at_origin();
        problem.act(&0, &7);
    }
}
