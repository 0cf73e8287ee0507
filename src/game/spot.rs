/// A cell on the board, addressed by zero-based row and column.
///
/// Spots flatten to a single index `row * cols + col` for payoff-matrix rows
/// and strategy-vector lookups, and unflatten back with the same column
/// count. The two conversions are inverse bijections for any fixed width.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Spot {
    pub row: usize,
    pub col: usize,
}

impl Spot {
    /// Row-major index of this spot on a board `cols` wide.
    pub fn flatten(&self, cols: usize) -> usize {
        assert!(cols > 0, "board has no columns");
        assert!(self.col < cols, "column {} off a board {} wide", self.col, cols);
        self.row * cols + self.col
    }

    /// Spot at a row-major index on a board `cols` wide.
    pub fn unflatten(index: usize, cols: usize) -> Self {
        assert!(cols > 0, "board has no columns");
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Manhattan distance to another spot.
    pub fn distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Spot {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Spot> for (usize, usize) {
    fn from(spot: Spot) -> Self {
        (spot.row, spot.col)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_flatten() {
        let cols = 7;
        for _ in 0..100 {
            let index = rand::random_range(0..cols * 9);
            assert_eq!(index, Spot::unflatten(index, cols).flatten(cols));
        }
    }

    #[test]
    fn row_major_order() {
        assert_eq!(Spot::from((0, 0)).flatten(3), 0);
        assert_eq!(Spot::from((0, 2)).flatten(3), 2);
        assert_eq!(Spot::from((1, 0)).flatten(3), 3);
        assert_eq!(Spot::from((2, 1)).flatten(3), 7);
    }

    #[test]
    fn manhattan_distance() {
        let a = Spot::from((0, 0));
        let b = Spot::from((2, 3));
        assert_eq!(a.distance(&b), 5);
        assert_eq!(b.distance(&a), 5);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    #[should_panic]
    fn flatten_rejects_wide_column() {
        Spot::from((0, 3)).flatten(3);
    }
}
