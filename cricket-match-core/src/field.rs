use anyhow::{anyhow, Result};

/// Environmental modifiers for a match venue.
///
/// `pitch_conditions` is the only modifier applied numerically: it scales
/// both sides of the per-ball contest symmetrically. `size`, `fan_ratio`
/// and `home_advantage` are descriptive and reserved for future use.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub size: String,
    pub fan_ratio: f64,
    pub pitch_conditions: f64,
    pub home_advantage: f64,
}

impl Field {
    pub fn new(
        size: impl Into<String>,
        fan_ratio: f64,
        pitch_conditions: f64,
        home_advantage: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&pitch_conditions) {
            return Err(anyhow!(
                "pitch_conditions {} is outside [0.0, 1.0]",
                pitch_conditions
            ));
        }
        Ok(Self {
            size: size.into(),
            fan_ratio,
            pitch_conditions,
            home_advantage,
        })
    }
}
