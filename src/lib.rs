pub mod gen;
pub mod model;
pub mod series;

use crate::model::TeamsFile;
use anyhow::{Context, Result};
use cricket_match_core::prelude::{
    Commentary, Field, MatchConfig, MatchEngine, RunsPolicy, Team,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    /// Teams/field input file; synthetic data is generated when absent.
    pub teams_path: Option<PathBuf>,
    pub total_overs: u32,
    pub seed: u64,
    pub matches: usize,
    pub runs_policy: RunsPolicy,
    /// Series summary CSV destination, if requested.
    pub output_path: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            teams_path: None,
            total_overs: 2,
            seed: 0,
            matches: 1,
            runs_policy: RunsPolicy::Uniform,
            output_path: None,
        }
    }
}

pub fn load_teams(path: &Path) -> Result<TeamsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file at {}", path.display()))?;
    let parsed: TeamsFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

fn build_setup(opts: &CliOptions) -> Result<(Team, Team, Field)> {
    match &opts.teams_path {
        Some(path) => {
            let file = load_teams(path)?;
            Ok((
                file.team_a.into_team()?,
                file.team_b.into_team()?,
                file.field.into_field()?,
            ))
        }
        None => {
            let mut rng = SmallRng::seed_from_u64(opts.seed);
            gen::synthetic_setup(&mut rng)
        }
    }
}

pub fn run(opts: CliOptions) -> Result<()> {
    let (team_a, team_b, field) = build_setup(&opts)?;
    let config = MatchConfig {
        total_overs: opts.total_overs,
        runs_policy: opts.runs_policy,
    };

    if opts.matches > 1 {
        let report = series::run_series(&team_a, &team_b, &field, config, opts.matches, opts.seed)?;
        println!(
            "{} vs {}: {} matches, {} - {} ({} tied), {} win rate {:.3}",
            report.team_a,
            report.team_b,
            report.matches,
            report.team_a_wins,
            report.team_b_wins,
            report.ties,
            report.team_a,
            report.win_rate_a()
        );
        if let Some(path) = &opts.output_path {
            series::write_csv(&report, path)?;
            println!("Wrote series summary to {}", path.display());
        }
        return Ok(());
    }

    let mut engine = MatchEngine::new(team_a, team_b, field, config)?;
    let summary = engine.run(opts.seed);
    let mut commentary = Commentary::new();
    commentary.observe_all(&summary.events);
    for line in commentary.lines() {
        println!("{line}");
    }
    Ok(())
}
