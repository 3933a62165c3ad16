use crate::innings::InningsPhase;
use crate::outcome::BallOutcome;
use serde::Serialize;

/// Structured narration events emitted by the engines.
///
/// The engine produces these instead of printing; a presentation layer
/// such as [`crate::commentary::Commentary`] turns them into text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    MatchStarted {
        team_a: String,
        team_b: String,
        captain_a: String,
        captain_b: String,
        total_overs: u32,
    },
    InningsStarted {
        batting_team: String,
        opening_batsman: String,
    },
    BallBowled {
        over: u32,
        ball: u8,
        batsman: String,
        bowler: String,
        outcome: BallOutcome,
        /// Runs scored off this ball; zero on a dismissal.
        runs: u32,
    },
    BatsmanIn {
        batsman: String,
        wickets: u32,
    },
    OverCompleted {
        overs_completed: u32,
        new_bowler: Option<String>,
    },
    InningsClosed {
        batting_team: String,
        runs: u32,
        wickets: u32,
        overs: u32,
        phase: InningsPhase,
    },
    MatchTied {
        score: u32,
    },
    MatchWon {
        winner: String,
        winning_score: u32,
    },
}
