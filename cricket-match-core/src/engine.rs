//! High-level match orchestration: two innings and a result.

use crate::event::MatchEvent;
use crate::field::Field;
use crate::innings::{InningsEngine, InningsPhase, InningsState};
use crate::outcome::RunsPolicy;
use crate::team::Team;
use anyhow::{bail, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

/// Match-level knobs validated at engine construction.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    pub total_overs: u32,
    pub runs_policy: RunsPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_overs: 2,
            runs_policy: RunsPolicy::Uniform,
        }
    }
}

/// Terminal outcome of a match. Equal totals are an explicit tie rather
/// than an arbitrary winner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum MatchOutcome {
    TeamAWins,
    TeamBWins,
    Tie,
}

/// Final scoreboard for one side's innings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InningsReport {
    pub team: String,
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub phase: InningsPhase,
}

/// Everything a caller needs after a match: the outcome, both innings'
/// scoreboards, and the full event stream for presentation.
#[derive(Clone, Debug)]
pub struct MatchSummary {
    pub outcome: MatchOutcome,
    pub innings: [InningsReport; 2],
    pub events: Vec<MatchEvent>,
}

impl MatchSummary {
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            MatchOutcome::TeamAWins => Some(self.innings[0].team.as_str()),
            MatchOutcome::TeamBWins => Some(self.innings[1].team.as_str()),
            MatchOutcome::Tie => None,
        }
    }

    pub fn winning_score(&self) -> Option<u32> {
        match self.outcome {
            MatchOutcome::TeamAWins => Some(self.innings[0].runs),
            MatchOutcome::TeamBWins => Some(self.innings[1].runs),
            MatchOutcome::Tie => None,
        }
    }
}

/// Orchestrates exactly two innings: team A bats first, then team B, with
/// no toss and no chase-target early termination. The winner is the side
/// with the strictly higher run total.
pub struct MatchEngine {
    team_a: Team,
    team_b: Team,
    field: Field,
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(team_a: Team, team_b: Team, field: Field, config: MatchConfig) -> Result<Self> {
        if config.total_overs == 0 {
            bail!("total_overs must be at least 1");
        }
        Ok(Self {
            team_a,
            team_b,
            field,
            config,
        })
    }

    /// Run the whole match. The same seed over the same inputs always
    /// reproduces the same summary.
    pub fn run(&mut self, seed: u64) -> MatchSummary {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut events = Vec::new();

        let captain_a = self.team_a.select_captain(&mut rng).name.clone();
        let captain_b = self.team_b.select_captain(&mut rng).name.clone();
        events.push(MatchEvent::MatchStarted {
            team_a: self.team_a.name.clone(),
            team_b: self.team_b.name.clone(),
            captain_a,
            captain_b,
            total_overs: self.config.total_overs,
        });

        let (state_a, phase_a) = InningsEngine::new(
            &self.team_a,
            &self.team_b,
            &self.field,
            self.config.total_overs,
            self.config.runs_policy,
        )
        .run(&mut rng, &mut events);
        let (state_b, phase_b) = InningsEngine::new(
            &self.team_b,
            &self.team_a,
            &self.field,
            self.config.total_overs,
            self.config.runs_policy,
        )
        .run(&mut rng, &mut events);

        let outcome = compare_totals(state_a.runs, state_b.runs);
        events.push(match outcome {
            MatchOutcome::TeamAWins => MatchEvent::MatchWon {
                winner: self.team_a.name.clone(),
                winning_score: state_a.runs,
            },
            MatchOutcome::TeamBWins => MatchEvent::MatchWon {
                winner: self.team_b.name.clone(),
                winning_score: state_b.runs,
            },
            MatchOutcome::Tie => MatchEvent::MatchTied { score: state_a.runs },
        });

        MatchSummary {
            outcome,
            innings: [
                innings_report(&self.team_a, state_a, phase_a),
                innings_report(&self.team_b, state_b, phase_b),
            ],
            events,
        }
    }
}

fn compare_totals(runs_a: u32, runs_b: u32) -> MatchOutcome {
    match runs_a.cmp(&runs_b) {
        std::cmp::Ordering::Greater => MatchOutcome::TeamAWins,
        std::cmp::Ordering::Less => MatchOutcome::TeamBWins,
        std::cmp::Ordering::Equal => MatchOutcome::Tie,
    }
}

fn innings_report(team: &Team, state: InningsState, phase: InningsPhase) -> InningsReport {
    InningsReport {
        team: team.name.clone(),
        runs: state.runs,
        wickets: state.wickets,
        overs: state.overs_completed,
        phase,
    }
}
