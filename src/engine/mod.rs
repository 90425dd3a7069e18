//! Puzzle-round engine
//!
//! Pure scoring and hint functions, the randomized letter pool, the per-level
//! [`Round`] state machine, the cross-level [`Session`] tracker and the [`Game`]
//! that ties them together.

mod game;
mod hints;
mod pool;
mod round;
mod scoring;
mod session;
mod snapshot;

pub use game::{Advance, Game, GameError};
pub use hints::{Hint, hint_text};
pub use pool::{can_form_word, generate_letters, shuffle};
pub use round::{CheckOutcome, Round, RoundMessage, RoundPhase};
pub use scoring::{
    HINT_PENALTY, MAX_HINTS, MAX_TEAMS, MIN_COMPETITIVE_TEAMS, MIN_SCORE, base_score,
    calculate_score, pool_size,
};
pub use session::{GameMode, LevelAdvance, Session, Team, TeamId};
pub use snapshot::{GameSnapshot, RoundSnapshot, SessionSnapshot, TeamScore};
