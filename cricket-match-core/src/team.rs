use crate::player::Player;
use anyhow::{anyhow, Result};
use rand::Rng;
use std::collections::VecDeque;

/// An ordered roster with a captain slot.
///
/// The roster doubles as the bowler pool (uniform draw with replacement)
/// and as the template for each innings' batting order. The captain is an
/// index into the roster rather than a copy of the player.
#[derive(Clone, Debug)]
pub struct Team {
    pub name: String,
    roster: Vec<Player>,
    captain: Option<usize>,
}

impl Team {
    /// Fails on an empty roster: a team needs at least one player to bat
    /// and one to bowl.
    pub fn new(name: impl Into<String>, roster: Vec<Player>) -> Result<Self> {
        let name = name.into();
        if roster.is_empty() {
            return Err(anyhow!("team '{}' has an empty roster", name));
        }
        Ok(Self {
            name,
            roster,
            captain: None,
        })
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Uniform draw over the roster, once at match start. Cosmetic only.
    pub fn select_captain(&mut self, rng: &mut impl Rng) -> &Player {
        let idx = rng.gen_range(0..self.roster.len());
        self.captain = Some(idx);
        &self.roster[idx]
    }

    pub fn captain(&self) -> Option<&Player> {
        self.captain.map(|idx| &self.roster[idx])
    }

    /// Fresh working queue of roster indices, consumed front-to-back as
    /// batsmen are dismissed. Built anew at each innings start.
    pub fn batting_order(&self) -> VecDeque<usize> {
        (0..self.roster.len()).collect()
    }

    /// Uniform draw with replacement from the bowler pool (the full
    /// roster). The pool is non-empty by construction, so no retry loop.
    pub fn draw_bowler<'a>(&'a self, rng: &mut impl Rng) -> &'a Player {
        let idx = rng.gen_range(0..self.roster.len());
        &self.roster[idx]
    }

    pub fn player(&self, idx: usize) -> &Player {
        &self.roster[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn make_roster(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| {
                Player::new(format!("P{}", i + 1), 0.5, 0.5, 0.5, 0.5, 0.5)
                    .expect("ratings in range")
            })
            .collect()
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(Team::new("Empty", Vec::new()).is_err());
    }

    #[test]
    fn captain_is_drawn_from_roster() {
        let mut team = Team::new("Side", make_roster(5)).expect("non-empty roster");
        assert!(team.captain().is_none());
        let mut rng = SmallRng::seed_from_u64(3);
        let name = team.select_captain(&mut rng).name.clone();
        assert_eq!(team.captain().expect("captain set").name, name);
        assert!(team.roster().iter().any(|p| p.name == name));
    }

    #[test]
    fn batting_order_is_a_fresh_copy_each_time() {
        let team = Team::new("Side", make_roster(3)).expect("non-empty roster");
        let mut first = team.batting_order();
        first.pop_front();
        let second = team.batting_order();
        assert_eq!(second.len(), 3);
        assert_eq!(second, VecDeque::from(vec![0, 1, 2]));
    }

    #[test]
    fn bowler_draws_cover_the_pool() {
        let team = Team::new("Side", make_roster(4)).expect("non-empty roster");
        let mut rng = SmallRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(team.draw_bowler(&mut rng).name.clone());
        }
        assert_eq!(seen.len(), 4);
    }
}
