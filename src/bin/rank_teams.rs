use ep_ranker::{SolverConfig, solve};
use tracing_subscriber::EnvFilter;

/// Ranks six teams from a season of head-to-head games
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let teams = ["Angels", "Bruins", "Comets", "Demons", "Eagles", "Flyers"];
    let winners = [0, 2, 1, 0, 1, 3, 0, 2, 4];
    let losers = [1, 3, 2, 4, 3, 5, 5, 4, 5];
    let games: Vec<[usize; 2]> = winners
        .iter()
        .zip(losers.iter())
        .map(|(&w, &l)| [w, l])
        .collect();

    let config = SolverConfig::default().with_iterations(100);
    let solution = match solve(&teams, &games, &config) {
        Ok(solution) => solution,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    for team in &solution.ranking {
        tracing::info!("{}: {:.2}", team.name, team.mean_skill);
    }
}
