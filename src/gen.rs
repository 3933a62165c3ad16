use anyhow::Result;
use cricket_match_core::prelude::{Field, Player, Team};
use rand::Rng;

pub const DEFAULT_ROSTER_SIZE: usize = 10;

/// Synthetic rosters and field matching the reference fixture: ten
/// players a side, each skill a uniform draw rounded to one decimal.
pub fn synthetic_setup(rng: &mut impl Rng) -> Result<(Team, Team, Field)> {
    let team_a = synthetic_team("Country1", DEFAULT_ROSTER_SIZE, rng)?;
    let team_b = synthetic_team("Country2", DEFAULT_ROSTER_SIZE, rng)?;
    let field = Field::new("Large", 0.7, 0.8, 0.9)?;
    Ok((team_a, team_b, field))
}

pub fn synthetic_team(name: &str, roster_size: usize, rng: &mut impl Rng) -> Result<Team> {
    let roster = (0..roster_size)
        .map(|i| {
            Player::new(
                format!("{}_{}", name, i + 1),
                rounded_skill(rng),
                rounded_skill(rng),
                rounded_skill(rng),
                rounded_skill(rng),
                rounded_skill(rng),
            )
        })
        .collect::<Result<Vec<_>>>()?;
    Team::new(name, roster)
}

fn rounded_skill(rng: &mut impl Rng) -> f64 {
    (rng.gen::<f64>() * 10.0).round() / 10.0
}
