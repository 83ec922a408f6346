//! Alternating turn invariant: human and computer take turns.

use super::Invariant;
use crate::Round;

/// Invariant: history alternates actors starting with the configured first
/// mover, each move carries its actor's mark, and an open round waits on the
/// actor after the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let config = round.config();
        let mut expected = *config.first_mover();

        for mov in round.history() {
            if mov.actor != expected || mov.mark != config.mark_of(mov.actor) {
                return false;
            }
            expected = expected.other();
        }

        match round.state().to_move() {
            Some(actor) => actor == expected,
            None => true,
        }
    }

    fn description() -> &'static str {
        "Human and opponent alternate, starting with the first mover"
    }
}
