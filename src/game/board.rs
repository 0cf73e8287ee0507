use super::difficulty::Difficulty;
use super::spot::Spot;
use rand::rngs::SmallRng;

/// The n×m playing field: one difficulty per cell, stored row-major.
///
/// Boards are immutable once generated. The payoff matrix, both strategies,
/// and every move in a match are indexed against the board's flattened cell
/// order, so the same width has to thread through all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Difficulty>,
}

impl Board {
    /// Fresh board with uniformly random cell difficulties.
    pub fn generate(rows: usize, cols: usize, rng: &mut SmallRng) -> Self {
        assert!(rows > 0, "board has no rows");
        assert!(cols > 0, "board has no columns");
        Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| Difficulty::draw(rng)).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, which is also the side of the payoff matrix.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether a spot lies on this board.
    pub fn contains(&self, spot: Spot) -> bool {
        spot.row < self.rows && spot.col < self.cols
    }

    /// Difficulty of the cell at a spot.
    pub fn at(&self, spot: Spot) -> Difficulty {
        assert!(self.contains(spot), "spot {} off a {}x{} board", spot, self.rows, self.cols);
        self.cells[spot.flatten(self.cols)]
    }

    /// All spots in row-major order, matching the flattened indexing.
    pub fn spots(&self) -> impl Iterator<Item = Spot> {
        let cols = self.cols;
        (0..self.cells()).map(move |index| Spot::unflatten(index, cols))
    }
}

impl From<Vec<Vec<Difficulty>>> for Board {
    fn from(grid: Vec<Vec<Difficulty>>) -> Self {
        assert!(!grid.is_empty(), "board has no rows");
        let cols = grid[0].len();
        assert!(cols > 0, "board has no columns");
        assert!(grid.iter().all(|row| row.len() == cols), "ragged board rows");
        Self {
            rows: grid.len(),
            cols,
            cells: grid.into_iter().flatten().collect(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, " {}", self.at(Spot::from((row, col))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
