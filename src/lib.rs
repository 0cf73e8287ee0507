//! Hide-and-seek as a zero-sum matrix game.
//!
//! Two roles share an n×m board: the hider picks a cell to hide in, the
//! seeker picks a cell to search. A precomputed payoff matrix prices every
//! (hider cell, seeker cell) pair, and a match is a sequence of rounds scored
//! against it, interactively one round at a time or as a Monte Carlo batch
//! replayed from sampled move lists.
//!
//! ## Match State
//!
//! - [`session::Session`] — One match: fixed board shape, payoff matrix, and
//!   proximity rule, plus the running totals that rounds mutate
//! - [`session::Tally`] — One role's score, rounds won, and last-round swing
//!
//! ## Match Generation
//!
//! - [`game::Board`] — Randomly generated grid of cell difficulties
//! - [`game::Payoffs`] — The zero-sum payoff matrix built from a board
//! - [`game::Strategy`] — A mixed strategy over cells, sampled into moves
//! - [`game::Solver`] — Seam for the external equilibrium service
//!
//! ## Batch Analysis
//!
//! - [`simulation::Round`] — Per-trial record captured during a replay
//! - [`simulation::Summary`] — Aggregates over a finished batch
//!
//! ## Wire Contracts
//!
//! - [`dto`] — Serde types for the generate, play, and simulate exchanges

pub mod dto;
pub mod game;
pub mod session;
pub mod simulation;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, scores, and damping factors.
pub type Utility = f32;
/// Mixed-strategy weights over board cells.
pub type Probability = f32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Paired trials per simulated match.
pub const TRIALS: usize = 100;
/// Matrix-time discount on payoffs at Manhattan distance 1 from the hider.
pub const ADJACENT_MISS_DISCOUNT: Utility = 0.5;
/// Matrix-time discount on payoffs at Manhattan distance 2 from the hider.
pub const NEARBY_MISS_DISCOUNT: Utility = 0.75;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
