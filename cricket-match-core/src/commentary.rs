use crate::event::MatchEvent;
use crate::outcome::BallOutcome;
use serde_json::json;

/// Text renderer for the engine's event stream.
///
/// Consumes [`MatchEvent`]s and accumulates human-readable narration
/// lines; the engine itself never prints.
#[derive(Clone, Debug, Default)]
pub struct Commentary {
    lines: Vec<String>,
}

impl Commentary {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn observe(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::MatchStarted {
                team_a,
                team_b,
                captain_a,
                captain_b,
                total_overs,
            } => {
                self.lines.push("--------- Game Information ---------".to_string());
                self.lines.push(format!("{team_a} Vs {team_b}"));
                self.lines
                    .push(format!("Captain 1 : {captain_a}, Captain 2 : {captain_b}"));
                self.lines.push(format!("Overs : {total_overs}"));
            }
            MatchEvent::InningsStarted {
                batting_team,
                opening_batsman,
            } => {
                self.lines.push(format!("---- {batting_team} Batting ----"));
                self.lines.push(format!("{opening_batsman} is in!"));
            }
            MatchEvent::BallBowled {
                over,
                ball,
                batsman,
                bowler,
                outcome,
                runs,
            } => {
                self.lines.push(format!(
                    "Over: {} Ball: {} Batsman: {} Bowler: {}",
                    over + 1,
                    ball,
                    batsman,
                    bowler
                ));
                match outcome {
                    BallOutcome::Dismissed => {
                        self.lines.push(format!("{batsman} is OUT!"));
                    }
                    BallOutcome::Survived => {
                        self.lines.push(format!("{batsman} plays the shot."));
                        self.lines.push(format!("Runs scored: {runs}"));
                    }
                }
            }
            MatchEvent::BatsmanIn { batsman, .. } => {
                self.lines.push(format!("{batsman} is in!"));
            }
            MatchEvent::OverCompleted {
                overs_completed,
                new_bowler,
            } => {
                self.lines.push(format!("Over {overs_completed} completed."));
                if let Some(bowler) = new_bowler {
                    self.lines
                        .push(format!("Over {} starting, {} to bowl.", overs_completed + 1, bowler));
                }
            }
            MatchEvent::InningsClosed {
                runs,
                wickets,
                overs,
                ..
            } => {
                self.lines.push(format!(
                    "Final Run: {runs} Wicket: {wickets} Overs: {overs}"
                ));
            }
            MatchEvent::MatchTied { score } => {
                self.lines.push("--------------- Result -----------------------".to_string());
                self.lines
                    .push(format!("MATCH TIED AT SCORE: {score}"));
            }
            MatchEvent::MatchWon {
                winner,
                winning_score,
            } => {
                self.lines.push("--------------- Winner -----------------------".to_string());
                self.lines
                    .push(format!("TEAM : {winner} WON BY SCORE: {winning_score}"));
            }
        }
    }

    pub fn observe_all<'a>(&mut self, events: impl IntoIterator<Item = &'a MatchEvent>) {
        for event in events {
            self.observe(event);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "commentary": self.lines })
    }
}
