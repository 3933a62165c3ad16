//! Core engine for a toy limited-overs cricket simulation.
//!
//! The main entry point is [`engine::MatchEngine`], which runs two innings
//! over externally supplied rosters and field conditions and produces a
//! structured event stream plus a final result.

pub mod commentary;
pub mod engine;
pub mod event;
pub mod field;
pub mod innings;
pub mod outcome;
pub mod player;
pub mod team;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::commentary::Commentary;
    pub use crate::engine::{InningsReport, MatchConfig, MatchEngine, MatchOutcome, MatchSummary};
    pub use crate::event::MatchEvent;
    pub use crate::field::Field;
    pub use crate::innings::{InningsEngine, InningsPhase, InningsState};
    pub use crate::outcome::{predict, BallOutcome, RunsPolicy};
    pub use crate::player::Player;
    pub use crate::team::Team;
}
