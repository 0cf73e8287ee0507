use crate::game::Spot;

/// Rejections raised by batch replay before any round is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Paired move lists of unequal length.
    MalformedSimulation { hiders: usize, seekers: usize },
    /// A move referred to a cell off the board.
    OutOfBounds { spot: Spot, rows: usize, cols: usize },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedSimulation { hiders, seekers } => {
                write!(f, "malformed simulation: {} hider moves vs {} seeker moves", hiders, seekers)
            }
            Self::OutOfBounds { spot, rows, cols } => {
                write!(f, "move {} off a {}x{} board", spot, rows, cols)
            }
        }
    }
}

impl std::error::Error for SessionError {}
