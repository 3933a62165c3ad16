use anyhow::{Context, Result};
use cricket_match_core::prelude::{Field, Player, Team};
use serde::Deserialize;

/// On-disk shape of a `teams.json` input file.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsFile {
    pub team_a: TeamDef,
    pub team_b: TeamDef,
    pub field: FieldDef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamDef {
    pub name: String,
    pub players: Vec<PlayerDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub bowling: f64,
    pub batting: f64,
    pub fielding: f64,
    pub running: f64,
    pub experience: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub size: String,
    pub fan_ratio: f64,
    pub pitch_conditions: f64,
    pub home_advantage: f64,
}

impl TeamDef {
    pub fn into_team(self) -> Result<Team> {
        let name = self.name;
        let roster = self
            .players
            .into_iter()
            .map(|p| Player::new(p.name, p.bowling, p.batting, p.fielding, p.running, p.experience))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid player in team '{name}'"))?;
        Team::new(name, roster)
    }
}

impl FieldDef {
    pub fn into_field(self) -> Result<Field> {
        Field::new(
            self.size,
            self.fan_ratio,
            self.pitch_conditions,
            self.home_advantage,
        )
    }
}
