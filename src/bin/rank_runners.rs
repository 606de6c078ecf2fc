use ep_ranker::{SolverConfig, solve};
use tracing_subscriber::EnvFilter;

/// Ranks five runners from the full finishing order of six races
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let runners = ["Runner 0", "Runner 1", "Runner 2", "Runner 3", "Runner 4"];
    let races: [[usize; 5]; 6] = [
        [0, 1, 2, 3, 4],
        [3, 2, 1, 0, 4],
        [0, 2, 1, 4, 3],
        [0, 4, 1, 2, 3],
        [1, 0, 2, 4, 3],
        [2, 0, 1, 4, 3],
    ];

    let config = match std::env::args().nth(1) {
        Some(path) => SolverConfig::from_file(path),
        None => Ok(SolverConfig::default()),
    };
    let solution = match config.and_then(|config| solve(&runners, &races, &config)) {
        Ok(solution) => solution,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("{:?} after {} sweeps", solution.report.status, solution.report.sweeps);
    for runner in &solution.ranking {
        let (lo, hi) = runner.credible_interval(0.95);
        tracing::info!(
            "{}: {:.2} (95% interval {:.2} to {:.2})",
            runner.name,
            runner.mean_skill,
            lo,
            hi
        );
    }
}
