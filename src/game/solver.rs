use super::matrix::Payoffs;
use super::strategy::Strategy;

/// Where mixed strategies come from.
///
/// Production matches pull equilibrium strategies for both roles from an
/// external LP service keyed on the payoff matrix. Anything that can price a
/// matrix into a (hider, seeker) strategy pair plugs in here.
pub trait Solver {
    /// Hider and seeker strategies for a payoff matrix, in that order.
    fn solve(&self, payoffs: &Payoffs) -> (Strategy, Strategy);
}

/// Equal weight on every cell for both roles.
///
/// A stand-in move source for demos and tests. It ignores the matrix
/// entirely and is not an equilibrium.
pub struct Uniform;

impl Solver for Uniform {
    fn solve(&self, payoffs: &Payoffs) -> (Strategy, Strategy) {
        (
            Strategy::uniform(payoffs.cells()),
            Strategy::uniform(payoffs.cells()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;
    use crate::game::difficulty::Difficulty;

    #[test]
    fn uniform_matches_matrix_size() {
        let board = Board::from(vec![vec![Difficulty::Neutral; 3]; 2]);
        let payoffs = Payoffs::from(&board);
        let (hider, seeker) = Uniform.solve(&payoffs);
        assert_eq!(hider.cells(), 6);
        assert_eq!(seeker.cells(), 6);
        assert!(hider.normalized());
        assert!(seeker.normalized());
    }
}
