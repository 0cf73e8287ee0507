use crate::Probability;
use crate::Utility;
use crate::game::Board;
use crate::game::Difficulty;
use crate::game::Payoffs;
use crate::game::Setup;
use crate::game::Spot;
use crate::game::Strategy;
use serde::{Deserialize, Serialize};

/// The full match setup on the wire: difficulty labels per cell, the payoff
/// matrix, and one probability vector per role, all in flattened order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub game_board: Vec<Vec<String>>,
    pub game_matrix: Vec<Vec<Utility>>,
    pub hider_probabilities: Vec<Probability>,
    pub seeker_probabilities: Vec<Probability>,
}

/// One sampled coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayResponse {
    pub row: usize,
    pub col: usize,
}

/// An ordered list of sampled coordinates.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub moves: Vec<PlayResponse>,
}

impl SimulateResponse {
    pub fn spots(&self) -> Vec<Spot> {
        self.moves.iter().map(|play| Spot::from(*play)).collect()
    }
}

impl From<&Setup> for GenerateResponse {
    fn from(setup: &Setup) -> Self {
        Self {
            game_board: (0..setup.board.rows())
                .map(|row| {
                    (0..setup.board.cols())
                        .map(|col| setup.board.at(Spot::from((row, col))).label().to_string())
                        .collect()
                })
                .collect(),
            game_matrix: setup.payoffs.rows().to_vec(),
            hider_probabilities: setup.hider.weights().to_vec(),
            seeker_probabilities: setup.seeker.weights().to_vec(),
        }
    }
}

impl TryFrom<GenerateResponse> for Setup {
    type Error = anyhow::Error;
    fn try_from(response: GenerateResponse) -> Result<Self, Self::Error> {
        let grid = response
            .game_board
            .iter()
            .map(|row| {
                row.iter()
                    .map(|label| Difficulty::try_from(label.as_str()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!(e))?;
        if grid.is_empty() || grid[0].is_empty() {
            return Err(anyhow::anyhow!("empty game board"));
        }
        if grid.iter().any(|row| row.len() != grid[0].len()) {
            return Err(anyhow::anyhow!("ragged game board"));
        }
        let board = Board::from(grid);
        let payoffs = Payoffs::try_from(response.game_matrix).map_err(|e| anyhow::anyhow!(e))?;
        if payoffs.cells() != board.cells() {
            return Err(anyhow::anyhow!(
                "{}-cell matrix against a {}-cell board",
                payoffs.cells(),
                board.cells()
            ));
        }
        if response.hider_probabilities.len() != board.cells()
            || response.seeker_probabilities.len() != board.cells()
        {
            return Err(anyhow::anyhow!("strategy length does not match the board"));
        }
        let hider = Strategy::from(response.hider_probabilities);
        let seeker = Strategy::from(response.seeker_probabilities);
        if !hider.normalized() || !seeker.normalized() {
            return Err(anyhow::anyhow!("strategies are not distributions"));
        }
        Ok(Self {
            board,
            payoffs,
            hider,
            seeker,
        })
    }
}

impl From<Spot> for PlayResponse {
    fn from(spot: Spot) -> Self {
        Self {
            row: spot.row,
            col: spot.col,
        }
    }
}

impl From<PlayResponse> for Spot {
    fn from(play: PlayResponse) -> Self {
        Self {
            row: play.row,
            col: play.col,
        }
    }
}

impl From<&[Spot]> for SimulateResponse {
    fn from(spots: &[Spot]) -> Self {
        Self {
            moves: spots.iter().map(|spot| PlayResponse::from(*spot)).collect(),
        }
    }
}
