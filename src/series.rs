use anyhow::Result;
use cricket_match_core::prelude::{Field, MatchConfig, MatchEngine, MatchOutcome, Team};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::path::Path;

/// Aggregate result of many independently seeded matches.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesReport {
    pub team_a: String,
    pub team_b: String,
    pub matches: usize,
    pub team_a_wins: usize,
    pub team_b_wins: usize,
    pub ties: usize,
}

impl SeriesReport {
    /// Win rate for team A, counting ties as half a win.
    pub fn win_rate_a(&self) -> f64 {
        (self.team_a_wins as f64 + 0.5 * self.ties as f64) / self.matches as f64
    }
}

/// Run `matches` independent matches in parallel, one seed per match
/// derived from `seed` so the whole series is reproducible.
pub fn run_series(
    team_a: &Team,
    team_b: &Team,
    field: &Field,
    config: MatchConfig,
    matches: usize,
    seed: u64,
) -> Result<SeriesReport> {
    if matches == 0 {
        anyhow::bail!("--matches must be > 0");
    }
    // Surface configuration errors before fanning out.
    MatchEngine::new(team_a.clone(), team_b.clone(), field.clone(), config)?;

    let outcomes: Vec<MatchOutcome> = (0..matches)
        .into_par_iter()
        .map(|index| {
            let mut match_rng = SmallRng::seed_from_u64(seed ^ ((index as u64) << 32));
            let match_seed = match_rng.gen();
            let mut engine = MatchEngine::new(
                team_a.clone(),
                team_b.clone(),
                field.clone(),
                config,
            )
            .expect("config validated before the parallel fan-out");
            engine.run(match_seed).outcome
        })
        .collect();

    let mut report = SeriesReport {
        team_a: team_a.name.clone(),
        team_b: team_b.name.clone(),
        matches,
        team_a_wins: 0,
        team_b_wins: 0,
        ties: 0,
    };
    for outcome in outcomes {
        match outcome {
            MatchOutcome::TeamAWins => report.team_a_wins += 1,
            MatchOutcome::TeamBWins => report.team_b_wins += 1,
            MatchOutcome::Tie => report.ties += 1,
        }
    }
    Ok(report)
}

pub fn write_csv(report: &SeriesReport, path: &Path) -> Result<()> {
    let mut out = String::from("team_a,team_b,matches,team_a_wins,team_b_wins,ties,team_a_win_rate\n");
    out.push_str(&format!(
        "{},{},{},{},{},{},{:.4}\n",
        report.team_a,
        report.team_b,
        report.matches,
        report.team_a_wins,
        report.team_b_wins,
        report.ties,
        report.win_rate_a()
    ));
    std::fs::write(path, out)?;
    Ok(())
}
