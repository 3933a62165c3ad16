use anyhow::{anyhow, Result};

/// Immutable skill attributes for one participant.
///
/// Every scalar is a rating in `[0.0, 1.0]`. Only `batting` and `bowling`
/// feed the outcome model; the rest are carried for external consumers.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub bowling: f64,
    pub batting: f64,
    pub fielding: f64,
    pub running: f64,
    pub experience: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        bowling: f64,
        batting: f64,
        fielding: f64,
        running: f64,
        experience: f64,
    ) -> Result<Self> {
        let name = name.into();
        for (label, value) in [
            ("bowling", bowling),
            ("batting", batting),
            ("fielding", fielding),
            ("running", running),
            ("experience", experience),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow!(
                    "Player '{}': {} rating {} is outside [0.0, 1.0]",
                    name,
                    label,
                    value
                ));
            }
        }
        Ok(Self {
            name,
            bowling,
            batting,
            fielding,
            running,
            experience,
        })
    }
}
