use super::request::GenerateRequest;
use super::request::PlayRequest;
use super::request::SimulateRequest;
use super::response::GenerateResponse;
use super::response::PlayResponse;
use super::response::SimulateResponse;
use crate::game::Setup;
use crate::game::Solver;
use crate::game::Strategy;
use rand::rngs::SmallRng;

/// Serve a fresh match: random board, payoff matrix, and one strategy per
/// role from the solver.
pub fn generate(
    request: &GenerateRequest,
    solver: &dyn Solver,
    rng: &mut SmallRng,
) -> GenerateResponse {
    log::debug!("generating a {}x{} match", request.n, request.m);
    GenerateResponse::from(&Setup::generate(request.n, request.m, false, solver, rng))
}

/// Serve one weighted draw from the submitted strategy.
pub fn play(request: &PlayRequest, rng: &mut SmallRng) -> PlayResponse {
    assert!(
        request.probabilities.len() == request.n * request.m,
        "strategy length does not match the board"
    );
    PlayResponse::from(Strategy::from(request.probabilities.clone()).sample(request.m, rng))
}

/// Serve an ordered move list of `num` weighted draws.
pub fn simulate(request: &SimulateRequest, rng: &mut SmallRng) -> SimulateResponse {
    assert!(
        request.probabilities.len() == request.n * request.m,
        "strategy length does not match the board"
    );
    log::debug!("sampling {} moves over {} cells", request.num, request.n * request.m);
    SimulateResponse::from(
        Strategy::from(request.probabilities.clone())
            .sample_many(request.m, request.num, rng)
            .as_slice(),
    )
}
