//! Match Simulation Binary
//!
//! Generates a match, samples a move list per role, and replays the batch
//! through the scoring session.
//!
//! Options: --rows, --cols, --proximity, --attenuate, --trials, --seed

use clap::Parser;
use hidenseek::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board rows
    #[arg(long, default_value_t = 4)]
    rows: usize,
    /// Board columns
    #[arg(long, default_value_t = 4)]
    cols: usize,
    /// Damp scores by normalized distance between the picks
    #[arg(long)]
    proximity: bool,
    /// Bake near-miss discounts into the payoff matrix instead
    #[arg(long, conflicts_with = "proximity")]
    attenuate: bool,
    /// Paired trials to replay
    #[arg(long, default_value_t = TRIALS)]
    trials: usize,
    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let setup = game::Setup::generate(args.rows, args.cols, args.attenuate, &game::Uniform, rng);
    log::debug!("{}", serde_json::to_string(&dto::GenerateResponse::from(&setup))?);
    println!("{}", setup.board);
    println!("{}", setup.payoffs);
    let hiders = dto::simulate(
        &dto::SimulateRequest {
            n: args.rows,
            m: args.cols,
            probabilities: setup.hider.weights().to_vec(),
            num: args.trials,
        },
        rng,
    )
    .spots();
    let seekers = dto::simulate(
        &dto::SimulateRequest {
            n: args.rows,
            m: args.cols,
            probabilities: setup.seeker.weights().to_vec(),
            num: args.trials,
        },
        rng,
    )
    .spots();
    let mut session = session::Session::from((&setup, args.proximity));
    let rounds = simulation::replay(&mut session, &hiders, &seekers)?;
    for round in &rounds {
        log::debug!("{}", round);
    }
    log::info!("{}", simulation::Summary::from(rounds.as_slice()));
    println!("{}", session);
    Ok(())
}
