use crate::event::MatchEvent;
use crate::field::Field;
use crate::outcome::{predict, BallOutcome, RunsPolicy};
use crate::team::Team;
use rand::Rng;
use serde::Serialize;

pub const BALLS_PER_OVER: u8 = 6;

/// Terminal and non-terminal phases of an innings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsPhase {
    InProgress,
    AllOut,
    OversComplete,
}

/// Scoreboard for one innings. Created fresh per innings; runs, wickets
/// and overs_completed only ever increase within it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct InningsState {
    pub runs: u32,
    pub wickets: u32,
    pub overs_completed: u32,
    /// 1..=6 within the over currently being bowled.
    pub ball_in_over: u8,
}

impl Default for InningsState {
    fn default() -> Self {
        Self {
            runs: 0,
            wickets: 0,
            overs_completed: 0,
            ball_in_over: 1,
        }
    }
}

/// Drives one team's batting innings ball-by-ball.
///
/// The batting order is consumed front-to-back; the bowler is drawn once
/// per over from the bowling side's pool and kept for all six balls. The
/// innings ends at `AllOut` the moment the order is exhausted (mid-over
/// included) or at `OversComplete` when the overs target is reached.
pub struct InningsEngine<'a> {
    batting: &'a Team,
    bowling: &'a Team,
    field: &'a Field,
    total_overs: u32,
    runs_policy: RunsPolicy,
}

impl<'a> InningsEngine<'a> {
    /// Rosters and overs are validated by the match engine before an
    /// innings is constructed.
    pub fn new(
        batting: &'a Team,
        bowling: &'a Team,
        field: &'a Field,
        total_overs: u32,
        runs_policy: RunsPolicy,
    ) -> Self {
        Self {
            batting,
            bowling,
            field,
            total_overs,
            runs_policy,
        }
    }

    pub fn run(
        &self,
        rng: &mut impl Rng,
        events: &mut Vec<MatchEvent>,
    ) -> (InningsState, InningsPhase) {
        let mut order = self.batting.batting_order();
        let mut state = InningsState::default();
        let mut phase = InningsPhase::InProgress;

        // Roster non-emptiness is a Team construction invariant.
        let mut batsman_idx = order
            .pop_front()
            .expect("batting order starts non-empty");
        let mut bowler = self.bowling.draw_bowler(rng);

        events.push(MatchEvent::InningsStarted {
            batting_team: self.batting.name.clone(),
            opening_batsman: self.batting.player(batsman_idx).name.clone(),
        });

        while phase == InningsPhase::InProgress {
            let batsman = self.batting.player(batsman_idx);
            let outcome = predict(batsman, bowler, self.field, rng);
            let runs = match outcome {
                BallOutcome::Dismissed => 0,
                BallOutcome::Survived => self.runs_policy.sample(rng),
            };
            events.push(MatchEvent::BallBowled {
                over: state.overs_completed,
                ball: state.ball_in_over,
                batsman: batsman.name.clone(),
                bowler: bowler.name.clone(),
                outcome,
                runs,
            });

            match outcome {
                BallOutcome::Dismissed => match order.pop_front() {
                    Some(next) => {
                        // A wicket is tallied only when a replacement
                        // walks in; the terminal dismissal closes the
                        // innings instead, keeping wickets below the
                        // roster size.
                        state.wickets += 1;
                        batsman_idx = next;
                        events.push(MatchEvent::BatsmanIn {
                            batsman: self.batting.player(batsman_idx).name.clone(),
                            wickets: state.wickets,
                        });
                    }
                    None => {
                        phase = InningsPhase::AllOut;
                        break;
                    }
                },
                BallOutcome::Survived => {
                    state.runs += runs;
                }
            }

            if state.ball_in_over == BALLS_PER_OVER {
                state.overs_completed += 1;
                state.ball_in_over = 1;
                if state.overs_completed == self.total_overs {
                    phase = InningsPhase::OversComplete;
                } else {
                    bowler = self.bowling.draw_bowler(rng);
                }
                events.push(MatchEvent::OverCompleted {
                    overs_completed: state.overs_completed,
                    new_bowler: (phase == InningsPhase::InProgress)
                        .then(|| bowler.name.clone()),
                });
            } else {
                state.ball_in_over += 1;
            }
        }

        events.push(MatchEvent::InningsClosed {
            batting_team: self.batting.name.clone(),
            runs: state.runs,
            wickets: state.wickets,
            overs: state.overs_completed,
            phase,
        });
        (state, phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn make_team(name: &str, count: usize, bowling: f64, batting: f64) -> Team {
        let roster = (0..count)
            .map(|i| {
                Player::new(format!("{}_{}", name, i + 1), bowling, batting, 0.5, 0.5, 0.5)
                    .expect("ratings in range")
            })
            .collect();
        Team::new(name, roster).expect("non-empty roster")
    }

    fn neutral_field() -> Field {
        Field::new("Large", 0.7, 0.8, 0.9).expect("pitch in range")
    }

    #[test]
    fn single_batsman_innings_ends_all_out_on_first_dismissal() {
        // Max batting vs zero bowling dismisses on every non-zero draw.
        let batting = make_team("Solo", 1, 0.5, 1.0);
        let bowling = make_team("Attack", 1, 0.0, 0.5);
        let field = neutral_field();
        let engine = InningsEngine::new(&batting, &bowling, &field, 1, RunsPolicy::Uniform);
        let mut events = Vec::new();
        let mut rng = SmallRng::seed_from_u64(5);
        let (state, phase) = engine.run(&mut rng, &mut events);
        assert_eq!(phase, InningsPhase::AllOut);
        assert_eq!(state.wickets, 0);
        assert_eq!(state.runs, 0);
        assert_eq!(state.overs_completed, 0);
    }

    #[test]
    fn zero_batting_side_always_plays_out_the_overs() {
        // batting_score is always 0, so no dismissal can ever fire.
        let batting = make_team("Blockers", 3, 0.5, 0.0);
        let bowling = make_team("Attack", 3, 1.0, 0.5);
        let field = neutral_field();
        let engine = InningsEngine::new(&batting, &bowling, &field, 4, RunsPolicy::Uniform);
        let mut events = Vec::new();
        let mut rng = SmallRng::seed_from_u64(21);
        let (state, phase) = engine.run(&mut rng, &mut events);
        assert_eq!(phase, InningsPhase::OversComplete);
        assert_eq!(state.overs_completed, 4);
        assert_eq!(state.wickets, 0);
        let balls = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::BallBowled { .. }))
            .count();
        assert_eq!(balls, 4 * BALLS_PER_OVER as usize);
    }

    #[test]
    fn wickets_never_reach_roster_size() {
        let field = neutral_field();
        for seed in 0..50 {
            let batting = make_team("Bat", 4, 0.5, 0.9);
            let bowling = make_team("Bowl", 4, 0.1, 0.5);
            let engine = InningsEngine::new(&batting, &bowling, &field, 20, RunsPolicy::Uniform);
            let mut events = Vec::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            let (state, _) = engine.run(&mut rng, &mut events);
            assert!(state.wickets < 4);
        }
    }

    #[test]
    fn overs_completed_never_exceeds_total() {
        let field = neutral_field();
        for seed in 0..50 {
            let batting = make_team("Bat", 5, 0.5, 0.3);
            let bowling = make_team("Bowl", 5, 0.4, 0.5);
            let engine = InningsEngine::new(&batting, &bowling, &field, 3, RunsPolicy::Uniform);
            let mut events = Vec::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            let (state, phase) = engine.run(&mut rng, &mut events);
            assert!(state.overs_completed <= 3);
            if phase == InningsPhase::OversComplete {
                assert_eq!(state.overs_completed, 3);
            }
        }
    }

    #[test]
    fn bowler_is_fixed_within_an_over() {
        let batting = make_team("Bat", 8, 0.5, 0.0);
        let bowling = make_team("Bowl", 8, 0.6, 0.5);
        let field = neutral_field();
        let engine = InningsEngine::new(&batting, &bowling, &field, 3, RunsPolicy::Uniform);
        let mut events = Vec::new();
        let mut rng = SmallRng::seed_from_u64(2);
        engine.run(&mut rng, &mut events);
        let mut bowler_by_over: std::collections::HashMap<u32, String> = Default::default();
        for event in &events {
            if let MatchEvent::BallBowled { over, bowler, .. } = event {
                let entry = bowler_by_over
                    .entry(*over)
                    .or_insert_with(|| bowler.clone());
                assert_eq!(entry, bowler);
            }
        }
        assert_eq!(bowler_by_over.len(), 3);
    }

    #[test]
    fn runs_and_wickets_are_monotone_in_the_event_stream() {
        let batting = make_team("Bat", 6, 0.5, 0.7);
        let bowling = make_team("Bowl", 6, 0.6, 0.5);
        let field = neutral_field();
        let engine = InningsEngine::new(&batting, &bowling, &field, 10, RunsPolicy::Weighted);
        let mut events = Vec::new();
        let mut rng = SmallRng::seed_from_u64(13);
        let (final_state, _) = engine.run(&mut rng, &mut events);
        let mut running = 0u32;
        let mut last_wickets = 0u32;
        for event in &events {
            match event {
                MatchEvent::BallBowled { runs, .. } => running += runs,
                MatchEvent::BatsmanIn { wickets, .. } => {
                    assert!(*wickets > last_wickets);
                    last_wickets = *wickets;
                }
                _ => {}
            }
        }
        assert_eq!(running, final_state.runs);
        assert_eq!(last_wickets, final_state.wickets);
    }
}
