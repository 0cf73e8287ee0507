use super::error::SessionError;
use super::tally::Tally;
use crate::Utility;
use crate::game::Payoffs;
use crate::game::Setup;
use crate::game::Spot;

/// One match of hide-and-seek against a fixed payoff matrix.
///
/// The board shape, the matrix, and the proximity rule are pinned at launch
/// and survive every reset; rounds only ever mutate the two tallies and the
/// latest pair of picks. A round is scored straight off the matrix: the
/// hider banks the entry for the played (hider cell, seeker cell) pair, the
/// seeker banks its negation, and whoever the round favored is credited the
/// round win. With the proximity rule on, misses are damped by how far apart
/// the two picks landed.
///
/// Single-threaded by construction. Batches replay through the same
/// per-round path as interactive play, so a simulated match and the
/// equivalent sequence of single rounds end in identical state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    rows: usize,
    cols: usize,
    proximity: bool,
    payoffs: Payoffs,
    hider: Tally,
    seeker: Tally,
    picks: Option<(Spot, Spot)>,
}

impl Session {
    pub fn new(rows: usize, cols: usize, proximity: bool, payoffs: Payoffs) -> Self {
        assert!(rows > 0, "session has no rows");
        assert!(cols > 0, "session has no columns");
        assert!(payoffs.cells() == rows * cols, "payoff matrix does not match board shape");
        Self {
            rows,
            cols,
            proximity,
            payoffs,
            hider: Tally::default(),
            seeker: Tally::default(),
            picks: None,
        }
    }

    /// Scores, round wins, and picks back to the launch baseline. The board
    /// shape, matrix, and proximity rule persist.
    pub fn reset(&mut self) {
        self.hider.clear();
        self.seeker.clear();
        self.picks = None;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn proximity(&self) -> bool {
        self.proximity
    }

    pub fn payoffs(&self) -> &Payoffs {
        &self.payoffs
    }

    pub fn hider(&self) -> &Tally {
        &self.hider
    }

    pub fn seeker(&self) -> &Tally {
        &self.seeker
    }

    /// The most recent round's (hider, seeker) picks, if any round has been
    /// played since launch or reset.
    pub fn picks(&self) -> Option<(Spot, Spot)> {
        self.picks
    }

    /// Whether a spot lies on this session's board.
    pub fn contains(&self, spot: Spot) -> bool {
        spot.row < self.rows && spot.col < self.cols
    }

    /// Row-major matrix index of a spot on this session's board.
    pub fn flatten(&self, spot: Spot) -> usize {
        assert!(self.contains(spot), "spot {} off a {}x{} board", spot, self.rows, self.cols);
        spot.flatten(self.cols)
    }

    /// Damping factor for one round under the proximity rule.
    ///
    /// Unity when the rule is off or the seeker caught the hider. Otherwise
    /// the Manhattan distance between the picks over `rows + cols`, which
    /// keeps the factor in `(0, 1]`: distant misses score near full price,
    /// close calls score a sliver.
    pub fn proximity_factor(&self, hider: Spot, seeker: Spot) -> Utility {
        match self.proximity && hider != seeker {
            false => 1.,
            true => hider.distance(&seeker) as Utility / (self.rows + self.cols) as Utility,
        }
    }

    /// Score one round: the hider banks the matrix entry for the played
    /// pair, damped by the proximity factor, and the seeker banks its
    /// negation. Damping scales this round's increment only, never the
    /// accumulated totals.
    pub fn update_score(&mut self, hider: Spot, seeker: Spot) {
        let delta = self.payoffs.at(self.flatten(hider), self.flatten(seeker));
        let factor = self.proximity_factor(hider, seeker);
        self.hider.post(delta * factor);
        self.seeker.post(-delta * factor);
    }

    /// Credit the round win: the seeker's on a catch, the hider's on a miss.
    /// Every round has exactly one winner.
    pub fn update_rounds_won(&mut self, hider: Spot, seeker: Spot) {
        match hider == seeker {
            true => self.seeker.win(),
            false => self.hider.win(),
        }
    }

    /// Play one full round: record the picks, post the scores, credit the
    /// round win.
    pub fn play(&mut self, hider: Spot, seeker: Spot) {
        assert!(self.contains(hider), "hider move {} off a {}x{} board", hider, self.rows, self.cols);
        assert!(self.contains(seeker), "seeker move {} off a {}x{} board", seeker, self.rows, self.cols);
        self.picks = Some((hider, seeker));
        self.update_score(hider, seeker);
        self.update_rounds_won(hider, seeker);
    }

    /// Pre-flight check for a batch: paired lengths, every move on the
    /// board. Touches nothing.
    pub fn vet(&self, hiders: &[Spot], seekers: &[Spot]) -> Result<(), SessionError> {
        if hiders.len() != seekers.len() {
            return Err(SessionError::MalformedSimulation {
                hiders: hiders.len(),
                seekers: seekers.len(),
            });
        }
        match hiders.iter().chain(seekers.iter()).find(|spot| !self.contains(**spot)) {
            Some(spot) => Err(SessionError::OutOfBounds {
                spot: *spot,
                rows: self.rows,
                cols: self.cols,
            }),
            None => Ok(()),
        }
    }

    /// Replay a full batch of paired moves, in order, through the same
    /// per-round path as interactive play.
    ///
    /// A rejected batch leaves the session untouched: validation runs in
    /// full before the first round is applied.
    pub fn simulate(&mut self, hiders: &[Spot], seekers: &[Spot]) -> Result<(), SessionError> {
        self.vet(hiders, seekers)?;
        for (hide, seek) in hiders.iter().zip(seekers.iter()) {
            self.play(*hide, *seek);
        }
        Ok(())
    }
}

impl From<(&Setup, bool)> for Session {
    fn from((setup, proximity): (&Setup, bool)) -> Self {
        Self::new(
            setup.board.rows(),
            setup.board.cols(),
            proximity,
            setup.payoffs.clone(),
        )
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌────────┬──────────┬────────┬──────────┐")?;
        writeln!(f, "│ Role   │    Score │ Rounds │    Swing │")?;
        writeln!(f, "├────────┼──────────┼────────┼──────────┤")?;
        writeln!(f, "│ Hider  │ {:>+8.2} │ {:>6} │ {:>+8.2} │", self.hider.score(), self.hider.rounds(), self.hider.swing())?;
        writeln!(f, "│ Seeker │ {:>+8.2} │ {:>6} │ {:>+8.2} │", self.seeker.score(), self.seeker.rounds(), self.seeker.swing())?;
        writeln!(f, "└────────┴──────────┴────────┴──────────┘")?;
        Ok(())
    }
}
