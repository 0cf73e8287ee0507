use crate::Probability;
use serde::{Deserialize, Serialize};

/// Start a match on an `n`×`m` board. The proximity flag rides along for
/// the client's own scoring rule; generation ignores it.
#[derive(Serialize, Deserialize)]
pub struct GenerateRequest {
    pub n: usize,
    pub m: usize,
    pub proximity: bool,
}

/// Sample one move from a mixed strategy over an `n`×`m` board.
#[derive(Serialize, Deserialize)]
pub struct PlayRequest {
    pub n: usize,
    pub m: usize,
    pub probabilities: Vec<Probability>,
}

/// Sample an ordered list of `num` moves from a mixed strategy.
#[derive(Serialize, Deserialize)]
pub struct SimulateRequest {
    pub n: usize,
    pub m: usize,
    pub probabilities: Vec<Probability>,
    pub num: usize,
}
