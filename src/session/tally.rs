use crate::Utility;

/// One role's running totals for the current match: cumulative score, rounds
/// won, and the signed swing the last round applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    score: Utility,
    rounds: u32,
    swing: Utility,
}

impl Tally {
    /// Apply one round's signed score change.
    pub fn post(&mut self, swing: Utility) {
        self.score += swing;
        self.swing = swing;
    }

    /// Credit one round win.
    pub fn win(&mut self) {
        self.rounds += 1;
    }

    /// Back to the launch baseline.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self) -> Utility {
        self.score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The last posted swing, zero before any round.
    pub fn swing(&self) -> Utility {
        self.swing
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:+.2} ({} won)", self.score, self.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let tally = Tally::default();
        assert_eq!(tally.score(), 0.);
        assert_eq!(tally.rounds(), 0);
        assert_eq!(tally.swing(), 0.);
    }

    #[test]
    fn posts_accumulate() {
        let mut tally = Tally::default();
        tally.post(2.);
        tally.post(-0.5);
        assert_eq!(tally.score(), 1.5);
        assert_eq!(tally.swing(), -0.5);
    }

    #[test]
    fn wins_count() {
        let mut tally = Tally::default();
        tally.win();
        tally.win();
        assert_eq!(tally.rounds(), 2);
    }

    #[test]
    fn clear_restores_baseline() {
        let mut tally = Tally::default();
        tally.post(3.);
        tally.win();
        tally.clear();
        assert_eq!(tally, Tally::default());
    }
}
