use crate::Utility;
use colored::Colorize;
use rand::Rng;
use rand::rngs::SmallRng;

/// How hard a cell is to hide in, and what hiding there pays.
///
/// Every board cell carries a difficulty fixing the zero-sum payoff pair for
/// the hider who picks it: the penalty for getting caught there, and the
/// reward for evading the seeker from there. Both are valued from the
/// hider's perspective; the seeker's side is the negation.
///
/// Easy cells are easy for the hider: a small penalty when caught and a
/// double reward when evading. Hard cells invert the tradeoff.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Neutral,
    Hard,
}

impl Difficulty {
    /// Hider's payoff when the seeker searches this exact cell.
    pub const fn caught(&self) -> Utility {
        match self {
            Self::Easy => -1.,
            Self::Neutral => -1.,
            Self::Hard => -3.,
        }
    }

    /// Hider's payoff when the seeker searches any other cell.
    pub const fn evaded(&self) -> Utility {
        match self {
            Self::Easy => 2.,
            Self::Neutral => 1.,
            Self::Hard => 1.,
        }
    }

    /// Uppercase wire label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Neutral => "NEUTRAL",
            Self::Hard => "HARD",
        }
    }

    /// Uniformly random difficulty, for board generation.
    pub fn draw(rng: &mut SmallRng) -> Self {
        match rng.random_range(0..3) {
            0 => Self::Easy,
            1 => Self::Neutral,
            _ => Self::Hard,
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = String;
    fn try_from(label: &str) -> Result<Self, Self::Error> {
        match label {
            "EASY" => Ok(Self::Easy),
            "NEUTRAL" => Ok(Self::Neutral),
            "HARD" => Ok(Self::Hard),
            _ => Err(format!("invalid difficulty label: {}", label)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = format!("{:<7}", self.label());
        match self {
            Self::Easy => write!(f, "{}", label.green()),
            Self::Neutral => write!(f, "{}", label.yellow()),
            Self::Hard => write!(f, "{}", label.red()),
        }
    }
}
