use crate::Utility;
use crate::game::Spot;
use crate::session::Session;
use crate::session::SessionError;

/// One replayed round, captured as the session applied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub trial: usize,
    pub hider: Spot,
    pub seeker: Spot,
    pub caught: bool,
    /// Hider's signed score change this round, damping included.
    pub swing: Utility,
    /// Hider's cumulative score after this round.
    pub hider_score: Utility,
    /// Seeker's cumulative score after this round.
    pub seeker_score: Utility,
}

/// Replay a batch while capturing a per-round trace.
///
/// Exactly `Session::simulate` with a recorder attached: same validation up
/// front, same order, same end state. A rejected batch yields no trace and
/// leaves the session untouched.
pub fn replay(
    session: &mut Session,
    hiders: &[Spot],
    seekers: &[Spot],
) -> Result<Vec<Round>, SessionError> {
    session.vet(hiders, seekers)?;
    Ok(hiders
        .iter()
        .zip(seekers.iter())
        .enumerate()
        .map(|(trial, (hide, seek))| {
            session.play(*hide, *seek);
            Round {
                trial,
                hider: *hide,
                seeker: *seek,
                caught: hide == seek,
                swing: session.hider().swing(),
                hider_score: session.hider().score(),
                seeker_score: session.seeker().score(),
            }
        })
        .collect())
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:>3} hider {} seeker {} {} {:+.2} -> {:+.2}",
            self.trial + 1,
            self.hider,
            self.seeker,
            match self.caught {
                true => "CATCH",
                false => "miss ",
            },
            self.swing,
            self.hider_score,
        )
    }
}
