use super::record::Round;
use crate::Probability;
use crate::Utility;

/// Aggregates over one finished batch of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub catches: usize,
    pub catch_rate: Probability,
    pub hider_score: Utility,
    pub seeker_score: Utility,
    /// Mean absolute per-round score change.
    pub mean_swing: Utility,
    /// Largest absolute per-round score change.
    pub peak_swing: Utility,
}

impl From<&[Round]> for Summary {
    fn from(rounds: &[Round]) -> Self {
        let trials = rounds.len();
        let catches = rounds.iter().filter(|round| round.caught).count();
        let last = rounds.last();
        Self {
            trials,
            catches,
            catch_rate: match trials {
                0 => 0.,
                n => catches as Probability / n as Probability,
            },
            hider_score: last.map(|round| round.hider_score).unwrap_or(0.),
            seeker_score: last.map(|round| round.seeker_score).unwrap_or(0.),
            mean_swing: match trials {
                0 => 0.,
                n => rounds.iter().map(|round| round.swing.abs()).sum::<Utility>() / n as Utility,
            },
            peak_swing: rounds
                .iter()
                .map(|round| round.swing.abs())
                .fold(0., Utility::max),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} trials, {} catches ({:.0}%), hider {:+.2}, seeker {:+.2}, swing {:.2} mean {:.2} peak",
            self.trials,
            self.catches,
            self.catch_rate * 100.,
            self.hider_score,
            self.seeker_score,
            self.mean_swing,
            self.peak_swing,
        )
    }
}
