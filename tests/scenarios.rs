use claims::assert_ok;
use ep_ranker::{Solution, SolveStatus, SolverConfig, solve};

const TEAMS: [&str; 6] = ["Angels", "Bruins", "Comets", "Demons", "Eagles", "Flyers"];
const RUNNERS: [&str; 5] = ["Zero", "One", "Two", "Three", "Four"];

fn league() -> Vec<[usize; 2]> {
    let winners = [0, 2, 1, 0, 1, 3, 0, 2, 4];
    let losers = [1, 3, 2, 4, 3, 5, 5, 4, 5];
    winners
        .iter()
        .zip(losers.iter())
        .map(|(&w, &l)| [w, l])
        .collect()
}

fn races() -> Vec<[usize; 5]> {
    vec![
        [0, 1, 2, 3, 4],
        [3, 2, 1, 0, 4],
        [0, 2, 1, 4, 3],
        [0, 4, 1, 2, 3],
        [1, 0, 2, 4, 3],
        [2, 0, 1, 4, 3],
    ]
}

fn position(solution: &Solution, name: &str) -> usize {
    solution
        .ranking
        .iter()
        .position(|r| r.name == name)
        .expect("every competitor is ranked")
}

#[test]
fn undefeated_team_outranks_winless_team() {
    let solution = assert_ok!(solve(&TEAMS, &league(), &SolverConfig::default()));
    assert_eq!(solution.report.status, SolveStatus::IterationLimitReached);
    assert_eq!(solution.ranking.len(), TEAMS.len());

    let angels = position(&solution, "Angels");
    let flyers = position(&solution, "Flyers");
    assert!(angels < flyers);
    assert!(solution.beliefs[0].mean() > solution.beliefs[5].mean());

    // Angels beat everyone they played and Flyers lost every game
    assert_eq!(solution.ranking[0].name, "Angels");
    assert_eq!(solution.ranking[TEAMS.len() - 1].name, "Flyers");
}

#[test]
fn league_ranking_is_sorted_and_finite() {
    let solution = assert_ok!(solve(&TEAMS, &league(), &SolverConfig::default()));
    for pair in solution.ranking.windows(2) {
        assert!(pair[0].mean_skill >= pair[1].mean_skill);
    }
    for team in &solution.ranking {
        assert!(team.mean_skill.is_finite());
        assert!(team.variance > 0. && team.variance < 9.);
    }
}

#[test]
fn frequent_winner_outranks_frequent_last_place() {
    // Zero wins three of six races and is never last; Three finishes last in four of six
    let solution = assert_ok!(solve(&RUNNERS, &races(), &SolverConfig::default()));
    let zero = position(&solution, "Zero");
    let three = position(&solution, "Three");
    assert!(zero < three);
    assert_eq!(solution.ranking[0].name, "Zero");
}

#[test]
fn race_results_converge_with_tolerance() {
    let config = SolverConfig::default()
        .with_iterations(1000)
        .with_convergence_tolerance(1e-8);
    let solution = assert_ok!(solve(&RUNNERS, &races(), &config));
    assert_eq!(solution.report.status, SolveStatus::Converged);

    let fixed = assert_ok!(solve(&RUNNERS, &races(), &SolverConfig::default()));
    let order: Vec<usize> = solution.ranking.iter().map(|r| r.index).collect();
    let fixed_order: Vec<usize> = fixed.ranking.iter().map(|r| r.index).collect();
    assert_eq!(order, fixed_order);
}

#[test]
fn dominance_orders_means() {
    // A finishes ahead of B every time they meet, in various company
    let observations: Vec<Vec<usize>> = vec![
        vec![0, 2, 1],
        vec![2, 0, 1],
        vec![0, 1],
        vec![3, 0, 2, 1],
        vec![2, 3],
    ];
    let names = ["A", "B", "C", "D"];
    let solution = assert_ok!(solve(&names, &observations, &SolverConfig::default()));
    assert!(solution.beliefs[0].mean() >= solution.beliefs[1].mean());
}

#[test]
fn evidence_propagates_transitively() {
    // A beats B, B beats C; A and C never meet
    let observations = vec![[0usize, 1], [0, 1], [1, 2], [1, 2]];
    let solution = assert_ok!(solve(&["A", "B", "C"], &observations, &SolverConfig::default()));
    let names: Vec<&str> = solution.ranking.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(solution.win_probability(0, 2) > solution.win_probability(0, 1));
}

#[test]
fn multiway_observation_equals_its_pairwise_chain() {
    // one 3-way finish is the same evidence as its two adjacent pairs in order
    let multiway = assert_ok!(solve(&["A", "B", "C"], &[[0usize, 1, 2]], &SolverConfig::default()));
    let chain = assert_ok!(solve(
        &["A", "B", "C"],
        &[[0usize, 1], [1, 2]],
        &SolverConfig::default()
    ));
    for (x, y) in multiway.beliefs.iter().zip(chain.beliefs.iter()) {
        assert!((x.mean() - y.mean()).abs() < 1e-12);
        assert!((x.variance() - y.variance()).abs() < 1e-12);
    }
}

#[test]
fn config_file_drives_the_solve() {
    let path = std::env::temp_dir().join("ep_ranker_scenario_params.json5");
    std::fs::write(
        &path,
        r#"{
  // looser prior, stop early
  prior_variance: 16,
  iterations: 400,
  convergence_tolerance: 1e-7,
}"#,
    )
    .unwrap();
    let config = assert_ok!(SolverConfig::from_file(&path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.prior_mean, 6.);
    assert_eq!(config.prior_variance, 16.);
    let solution = assert_ok!(solve(&TEAMS, &league(), &config));
    assert_eq!(solution.report.status, SolveStatus::Converged);
    assert_eq!(solution.ranking[0].name, "Angels");
}
