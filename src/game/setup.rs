use super::board::Board;
use super::matrix::Payoffs;
use super::solver::Solver;
use super::strategy::Strategy;
use rand::rngs::SmallRng;

/// Everything a match needs before the first round: the board, the payoff
/// matrix priced from it, and one mixed strategy per role.
#[derive(Debug, Clone)]
pub struct Setup {
    pub board: Board,
    pub payoffs: Payoffs,
    pub hider: Strategy,
    pub seeker: Strategy,
}

impl Setup {
    /// Assembles a fresh match: random board, payoff matrix, and strategies
    /// from the solver. With `discounted` the near-miss discounts are baked
    /// into the matrix before the solver prices it.
    pub fn generate(
        rows: usize,
        cols: usize,
        discounted: bool,
        solver: &dyn Solver,
        rng: &mut SmallRng,
    ) -> Self {
        let board = Board::generate(rows, cols, rng);
        let payoffs = Payoffs::from(&board);
        let payoffs = match discounted {
            true => payoffs.penalized(rows, cols),
            false => payoffs,
        };
        let (hider, seeker) = solver.solve(&payoffs);
        Self {
            board,
            payoffs,
            hider,
            seeker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::solver::Uniform;
    use rand::SeedableRng;

    #[test]
    fn pieces_agree_on_size() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let setup = Setup::generate(3, 5, false, &Uniform, rng);
        assert_eq!(setup.board.cells(), 15);
        assert_eq!(setup.payoffs.cells(), 15);
        assert_eq!(setup.hider.cells(), 15);
        assert_eq!(setup.seeker.cells(), 15);
    }

    #[test]
    fn discounting_shrinks_near_misses() {
        let plain = Setup::generate(2, 2, false, &Uniform, &mut SmallRng::seed_from_u64(5));
        let baked = Setup::generate(2, 2, true, &Uniform, &mut SmallRng::seed_from_u64(5));
        assert_eq!(plain.board, baked.board);
        assert_eq!(baked.payoffs, plain.payoffs.clone().penalized(2, 2));
    }
}
