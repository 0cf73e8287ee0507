use super::board::Board;
use super::spot::Spot;
use crate::ADJACENT_MISS_DISCOUNT;
use crate::NEARBY_MISS_DISCOUNT;
use crate::Utility;

/// The zero-sum payoff table, one row per hider cell and one column per
/// seeker cell in flattened order.
///
/// Entry `[h][s]` is the hider's gain when hiding in cell `h` while the
/// seeker searches cell `s`; the seeker's gain is its negation. Rows follow
/// the hider's cell difficulty: the diagonal holds the caught penalty, every
/// off-diagonal entry the evasion reward.
#[derive(Debug, Clone, PartialEq)]
pub struct Payoffs {
    grid: Vec<Vec<Utility>>,
}

impl Payoffs {
    /// Side length, equal to the number of board cells.
    pub fn cells(&self) -> usize {
        self.grid.len()
    }

    /// Hider's payoff for a (hider cell, seeker cell) pair of flat indices.
    pub fn at(&self, hider: usize, seeker: usize) -> Utility {
        assert!(hider < self.cells(), "hider index {} off a {}-cell matrix", hider, self.cells());
        assert!(seeker < self.cells(), "seeker index {} off a {}-cell matrix", seeker, self.cells());
        self.grid[hider][seeker]
    }

    pub fn rows(&self) -> &[Vec<Utility>] {
        &self.grid
    }

    /// Copy of this matrix with near-miss discounts baked in.
    ///
    /// Off-diagonal payoffs shrink when the searched cell lands close to the
    /// hider on a `rows`×`cols` board: halved at Manhattan distance 1, cut
    /// to three quarters at distance 2. Catches keep their full price.
    pub fn penalized(self, rows: usize, cols: usize) -> Self {
        assert!(rows * cols == self.cells(), "board shape does not match matrix");
        let grid = self
            .grid
            .into_iter()
            .enumerate()
            .map(|(h, row)| {
                let hide = Spot::unflatten(h, cols);
                row.into_iter()
                    .enumerate()
                    .map(|(s, x)| match hide.distance(&Spot::unflatten(s, cols)) {
                        0 => x,
                        1 => x * ADJACENT_MISS_DISCOUNT,
                        2 => x * NEARBY_MISS_DISCOUNT,
                        _ => x,
                    })
                    .collect()
            })
            .collect();
        Self { grid }
    }
}

impl From<&Board> for Payoffs {
    fn from(board: &Board) -> Self {
        let cells = board.cells();
        let grid = board
            .spots()
            .map(|hide| board.at(hide))
            .enumerate()
            .map(|(h, difficulty)| {
                (0..cells)
                    .map(|s| match s == h {
                        true => difficulty.caught(),
                        false => difficulty.evaded(),
                    })
                    .collect()
            })
            .collect();
        Self { grid }
    }
}

impl TryFrom<Vec<Vec<Utility>>> for Payoffs {
    type Error = String;
    fn try_from(grid: Vec<Vec<Utility>>) -> Result<Self, Self::Error> {
        let cells = grid.len();
        if cells == 0 {
            return Err("empty payoff matrix".to_string());
        }
        if grid.iter().any(|row| row.len() != cells) {
            return Err(format!("payoff matrix is not {0}x{0}", cells));
        }
        Ok(Self { grid })
    }
}

impl std::fmt::Display for Payoffs {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>6}", "")?;
        for s in 1..=self.cells() {
            write!(f, " {:>7}", format!("S{}", s))?;
        }
        writeln!(f)?;
        for (h, row) in self.grid.iter().enumerate() {
            write!(f, "{:>6}", format!("H{}", h + 1))?;
            for x in row {
                write!(f, " {:>7.2}", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty::Difficulty;

    #[test]
    fn diagonal_prices_capture() {
        let board = Board::from(vec![vec![Difficulty::Easy], vec![Difficulty::Hard]]);
        let payoffs = Payoffs::from(&board);
        assert_eq!(payoffs.at(0, 0), -1.);
        assert_eq!(payoffs.at(0, 1), 2.);
        assert_eq!(payoffs.at(1, 0), 1.);
        assert_eq!(payoffs.at(1, 1), -3.);
    }

    #[test]
    fn rows_follow_the_hider_cell() {
        let board = Board::from(vec![
            vec![Difficulty::Neutral, Difficulty::Hard],
            vec![Difficulty::Easy, Difficulty::Neutral],
        ]);
        let payoffs = Payoffs::from(&board);
        for h in 0..4 {
            let difficulty = board.at(Spot::unflatten(h, 2));
            for s in 0..4 {
                match s == h {
                    true => assert_eq!(payoffs.at(h, s), difficulty.caught()),
                    false => assert_eq!(payoffs.at(h, s), difficulty.evaded()),
                }
            }
        }
    }

    #[test]
    fn near_misses_discounted() {
        let board = Board::from(vec![vec![Difficulty::Neutral; 4]]);
        let payoffs = Payoffs::from(&board).penalized(1, 4);
        assert_eq!(payoffs.at(0, 1), 0.50);
        assert_eq!(payoffs.at(0, 2), 0.75);
        assert_eq!(payoffs.at(0, 3), 1.00);
        assert_eq!(payoffs.at(3, 2), 0.50);
    }

    #[test]
    fn catches_keep_full_price() {
        let board = Board::from(vec![vec![Difficulty::Hard; 3], vec![Difficulty::Hard; 3]]);
        let plain = Payoffs::from(&board);
        let penalized = plain.clone().penalized(2, 3);
        for h in 0..6 {
            assert_eq!(penalized.at(h, h), plain.at(h, h));
        }
    }

    #[test]
    fn rejects_ragged_grid() {
        assert!(Payoffs::try_from(vec![vec![1., 2.], vec![3.]]).is_err());
        assert!(Payoffs::try_from(vec![vec![1., 2.]]).is_err());
        assert!(Payoffs::try_from(Vec::new()).is_err());
    }
}
