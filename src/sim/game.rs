//! Match state machine
//!
//! Owns turn order, scores and the round lifecycle. Every mutation goes
//! through `start_match`, `submit_throw` or `reset_match`; a rejected call
//! leaves the state untouched.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Verdict, classify, scatter_debris};
use super::geometry::Rect;
use super::placement::{hit_box, place};
use super::state::{GameEvent, GamePhase, Player, PlayerId, Snapshot, ThrowRequest};
use super::terrain::{Building, TerrainParams, generate};
use super::trajectory::{Launch, Physics, Replay, simulate};
use crate::consts::{ACTOR_HEIGHT, WIN_THRESHOLD};
use crate::error::{ConfigError, ThrowError};
use crate::settings::Settings;

/// Result of a resolved throw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowOutcome {
    pub thrower: PlayerId,
    pub verdict: Verdict,
    pub hit_point: Option<IVec2>,
    /// Player credited with a point, if the throw ended the round
    pub scorer: Option<PlayerId>,
    /// Set when the point ended the match
    pub winner: Option<PlayerId>,
    /// Player whose turn it is now
    pub next_player: PlayerId,
}

/// The single authoritative match
#[derive(Debug, Clone)]
pub struct MatchState {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    phase: GamePhase,
    active: PlayerId,
    players: [Player; 2],
    buildings: Vec<Building>,
    wind: f64,
    round: u32,
    last_trajectory: Vec<IVec2>,
    last_verdict: Option<Verdict>,
    last_hit_point: Option<IVec2>,
    debris: Vec<IVec2>,
    /// Flight of the most recent throw, kept for replay after the round moves on
    replay_points: Vec<IVec2>,
    replay_hit: Option<IVec2>,
    winner: Option<PlayerId>,
    events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a match and start it immediately
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut state = Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::AwaitingInput,
            active: PlayerId::First,
            players: [Player::new(PlayerId::First), Player::new(PlayerId::Second)],
            buildings: Vec::new(),
            wind: 0.0,
            round: 0,
            last_trajectory: Vec::new(),
            last_verdict: None,
            last_hit_point: None,
            debris: Vec::new(),
            replay_points: Vec::new(),
            replay_hit: None,
            winner: None,
            events: Vec::new(),
        };
        state.start_match();
        Ok(state)
    }

    /// Create a match whose first round uses a scripted skyline and wind.
    /// Later rounds are generated from the seed as usual.
    pub fn with_layout(
        settings: Settings,
        seed: u64,
        buildings: Vec<Building>,
        wind: f64,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        if buildings.len() < 2 {
            return Err(ConfigError::Invalid("need at least two buildings"));
        }
        let on_screen = buildings.iter().all(|b| {
            b.width > 0
                && b.height > 0
                && b.left() >= 0
                && b.right() <= settings.screen_width
                && b.bottom() == settings.screen_height
                && b.top() >= ACTOR_HEIGHT
        });
        if !on_screen {
            return Err(ConfigError::Invalid(
                "buildings must stand on the ground inside the screen",
            ));
        }
        if !wind.is_finite() {
            return Err(ConfigError::Invalid("wind must be finite"));
        }

        let mut state = Self::new(settings, seed)?;
        // Replace the generated first round, including its announcement
        state.events.retain(|e| !matches!(e, GameEvent::RoundStarted { .. }));
        state.buildings = buildings;
        state.wind = wind;
        state.place_players();
        state.announce_round();
        Ok(state)
    }

    /// Zero both scores and begin round one with player 1 throwing
    pub fn start_match(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.winner = None;
        self.round = 0;
        self.replay_points.clear();
        self.replay_hit = None;
        log::info!("Match started (seed {})", self.seed);
        self.events.push(GameEvent::MatchStarted);
        self.begin_round(PlayerId::First);
    }

    /// Abandon the current match and start over; allowed in any phase
    pub fn reset_match(&mut self) {
        log::info!("Match reset during round {} ({:?})", self.round, self.phase);
        self.start_match();
    }

    /// Validate raw numbers and throw for the active player
    pub fn submit_throw(&mut self, angle: f64, velocity: f64) -> Result<ThrowOutcome, ThrowError> {
        self.ensure_awaiting("submit a throw")?;
        let request = ThrowRequest::new(angle, velocity).map_err(|e| {
            log::warn!("Rejected throw from {}: {}", self.active, e);
            ThrowError::from(e)
        })?;
        self.throw(request)
    }

    /// Throw a pre-validated request for the active player
    pub fn throw(&mut self, request: ThrowRequest) -> Result<ThrowOutcome, ThrowError> {
        self.ensure_awaiting("submit a throw")?;
        self.phase = GamePhase::Simulating;

        let thrower = self.active;
        self.events.push(GameEvent::ThrowStarted {
            player: thrower,
            angle: request.angle(),
            velocity: request.velocity(),
        });
        self.debris.clear();

        let launch = Launch {
            origin: self.players[thrower.index()].position,
            angle: request.angle(),
            velocity: request.velocity(),
            facing: thrower.facing(),
        };
        let box1 = self.hit_box(PlayerId::First);
        let box2 = self.hit_box(PlayerId::Second);
        let own_box = self.hit_box(thrower);
        let buildings = &self.buildings;

        // The thrower's own box only counts once the projectile has left it
        let mut armed = false;
        let result = simulate(
            &launch,
            self.wind,
            &Physics::from(&self.settings),
            self.settings.bounds(),
            |p| {
                if !armed {
                    if own_box.contains(p) {
                        return false;
                    }
                    armed = true;
                }
                classify(p, buildings, &box1, &box2).is_hit()
            },
        );

        let verdict = result
            .hit_point
            .map_or(Verdict::None, |p| classify(p, buildings, &box1, &box2));
        log::debug!(
            "{} threw {:.1}° at {:.1}: {:?} ({:?}, {} points)",
            thrower,
            request.angle(),
            request.velocity(),
            verdict,
            result.termination,
            result.points.len()
        );

        self.last_trajectory = result.points;
        self.replay_points.clone_from(&self.last_trajectory);
        self.replay_hit = result.hit_point;
        Ok(self.resolve(verdict, result.hit_point))
    }

    /// Resolve the active player's throw with a known verdict, skipping flight
    #[cfg(test)]
    pub(crate) fn apply_verdict(
        &mut self,
        verdict: Verdict,
        point: Option<IVec2>,
    ) -> Result<ThrowOutcome, ThrowError> {
        if !matches!(self.phase, GamePhase::AwaitingInput | GamePhase::Simulating) {
            return Err(self.phase_error("apply a verdict"));
        }
        self.last_trajectory.clear();
        self.debris.clear();
        self.replay_points.clear();
        self.replay_hit = point;
        Ok(self.resolve(verdict, point))
    }

    fn resolve(&mut self, verdict: Verdict, point: Option<IVec2>) -> ThrowOutcome {
        let thrower = self.active;
        self.last_verdict = Some(verdict);
        self.last_hit_point = point;

        if verdict.is_hit() {
            if let Some(p) = point {
                self.debris = scatter_debris(p, &mut self.rng);
            }
            self.events.push(GameEvent::Hit { verdict, point });
        } else {
            self.events.push(GameEvent::Missed);
        }

        let mut outcome = ThrowOutcome {
            thrower,
            verdict,
            hit_point: point,
            scorer: None,
            winner: None,
            next_player: thrower,
        };

        let Some(hit) = verdict.player_hit() else {
            self.active = thrower.other();
            self.phase = GamePhase::AwaitingInput;
            self.events.push(GameEvent::TurnPassed { to: self.active });
            outcome.next_player = self.active;
            return outcome;
        };

        // The player who was not hit takes the point
        let scorer = hit.other();
        self.players[scorer.index()].score += 1;
        self.phase = GamePhase::RoundResolved;
        outcome.scorer = Some(scorer);

        let (s1, s2) = self.scores();
        log::info!("{} wins round {} ({} - {})", scorer, self.round, s1, s2);
        self.events.push(GameEvent::RoundEnded {
            round: self.round,
            scorer,
        });

        if self.players[scorer.index()].score >= WIN_THRESHOLD {
            self.phase = GamePhase::MatchOver;
            self.winner = Some(scorer);
            outcome.winner = Some(scorer);
            log::info!("{} wins the match ({} - {})", scorer, s1, s2);
            self.events.push(GameEvent::MatchEnded { winner: scorer });
        } else {
            // The player who was hit opens the next round
            self.begin_round(hit);
            outcome.next_player = hit;
        }

        outcome
    }

    fn begin_round(&mut self, leader: PlayerId) {
        self.round += 1;
        self.clear_last_throw();
        self.buildings = generate(&TerrainParams::from(&self.settings), &mut self.rng);
        self.place_players();
        self.wind = self.roll_wind();
        self.active = leader;
        self.phase = GamePhase::AwaitingInput;
        self.announce_round();
    }

    fn announce_round(&mut self) {
        let leader = self.active;
        log::info!(
            "Round {}: {} leads, wind {:+.1}",
            self.round,
            leader,
            self.wind
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.round,
            leader,
        });
    }

    fn place_players(&mut self) {
        let (p1, p2) = place(
            &self.buildings,
            self.settings.screen_width,
            self.settings.screen_height,
        );
        self.players[0].position = p1;
        self.players[1].position = p2;
    }

    fn roll_wind(&mut self) -> f64 {
        let limit = self.settings.wind_limit;
        if limit > 0.0 {
            self.rng.random_range(-limit..limit)
        } else {
            0.0
        }
    }

    fn clear_last_throw(&mut self) {
        self.last_trajectory.clear();
        self.last_verdict = None;
        self.last_hit_point = None;
        self.debris.clear();
    }

    fn ensure_awaiting(&self, operation: &'static str) -> Result<(), ThrowError> {
        if self.phase == GamePhase::AwaitingInput {
            Ok(())
        } else {
            Err(self.phase_error(operation))
        }
    }

    fn phase_error(&self, operation: &'static str) -> ThrowError {
        log::warn!("Cannot {} while {:?}", operation, self.phase);
        ThrowError::InvalidPhaseOperation {
            operation,
            phase: self.phase,
        }
    }

    // === Read-only accessors ===

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn wind(&self) -> f64 {
        self.wind
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn last_trajectory(&self) -> &[IVec2] {
        &self.last_trajectory
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    pub fn last_hit_point(&self) -> Option<IVec2> {
        self.last_hit_point
    }

    pub fn debris(&self) -> &[IVec2] {
        &self.debris
    }

    pub fn hit_box(&self, id: PlayerId) -> Rect {
        hit_box(self.players[id.index()].position)
    }

    /// Animated playback of the last throw, even one that ended the round
    pub fn replay_last_throw(&self) -> Replay<'_> {
        Replay::new(&self.replay_points, self.replay_hit)
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            phase: self.phase,
            active_player: self.active,
            players: self.players,
            wind: self.wind,
            buildings: self.buildings.clone(),
            last_trajectory: self.last_trajectory.clone(),
            last_verdict: self.last_verdict,
            last_hit_point: self.last_hit_point,
            debris: self.debris.clone(),
            winner: self.winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::sim::ReplayFrame;
    use proptest::prelude::*;

    /// Flat-ish eight building skyline on the default 640x350 arena
    fn skyline() -> Vec<Building> {
        let heights = [200, 170, 150, 160, 180, 170, 190, 200];
        let widths = [76, 78, 75, 80, 77, 79, 74, 78];
        heights
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (&h, w))| Rect::new(i as i32 * 80, 350 - h, w, h))
            .collect()
    }

    fn scripted(wind: f64) -> MatchState {
        MatchState::with_layout(Settings::default(), 1234, skyline(), wind).unwrap()
    }

    #[test]
    fn test_new_match_awaits_player_one() {
        let state = MatchState::new(Settings::default(), 42).unwrap();
        assert_eq!(state.phase(), GamePhase::AwaitingInput);
        assert_eq!(state.active_player(), PlayerId::First);
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.round(), 1);
        assert_eq!(state.buildings().len(), 8);
        assert!(state.wind() >= -10.0 && state.wind() < 10.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            building_count: 0,
            ..Settings::default()
        };
        assert!(MatchState::new(settings, 1).is_err());
        assert!(MatchState::with_layout(Settings::default(), 1, vec![], 0.0).is_err());
    }

    #[test]
    fn test_same_seed_same_round() {
        let a = MatchState::new(Settings::default(), 777).unwrap();
        let b = MatchState::new(Settings::default(), 777).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_players_stand_on_outer_buildings() {
        let state = scripted(0.0);
        assert_eq!(state.player(PlayerId::First).position, IVec2::new(38, 130));
        assert_eq!(state.player(PlayerId::Second).position, IVec2::new(599, 130));
    }

    #[test]
    fn test_scenario_a_lob_lands_on_building() {
        let mut state = scripted(0.0);
        let outcome = state.submit_throw(45.0, 50.0).unwrap();

        assert_eq!(outcome.verdict, Verdict::Building);
        assert_eq!(outcome.hit_point, Some(IVec2::new(327, 173)));
        assert_eq!(state.last_trajectory().len(), 83);
        assert_eq!(state.last_trajectory()[0], IVec2::new(38, 130));
        assert_eq!(state.last_trajectory().last(), Some(&IVec2::new(327, 173)));

        // Building hits just pass the turn
        assert_eq!(outcome.next_player, PlayerId::Second);
        assert_eq!(state.active_player(), PlayerId::Second);
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.debris().len(), crate::consts::DEBRIS_COUNT);
    }

    #[test]
    fn test_scenario_c_off_screen_miss() {
        let mut state = scripted(0.0);
        let outcome = state.submit_throw(60.0, 100.0).unwrap();

        assert_eq!(outcome.verdict, Verdict::None);
        assert_eq!(outcome.hit_point, None);
        assert_eq!(state.active_player(), PlayerId::Second);
        assert_eq!(state.phase(), GamePhase::AwaitingInput);
        assert_eq!(state.scores(), (0, 0));
        assert!(state.debris().is_empty());
        assert_eq!(
            state.replay_last_throw().last(),
            Some(ReplayFrame::Miss)
        );
    }

    #[test]
    fn test_direct_hit_scores_and_starts_new_round() {
        let mut state = scripted(0.0);
        let outcome = state.submit_throw(16.0, 100.0).unwrap();

        assert_eq!(outcome.verdict, Verdict::Player2);
        assert_eq!(outcome.hit_point, Some(IVec2::new(595, 137)));
        assert_eq!(outcome.scorer, Some(PlayerId::First));
        assert_eq!(outcome.winner, None);
        assert_eq!(state.scores(), (1, 0));
        assert_eq!(state.round(), 2);
        assert_eq!(state.phase(), GamePhase::AwaitingInput);
        // The player who was hit leads the next round
        assert_eq!(state.active_player(), PlayerId::Second);
        // Fresh skyline from the seed replaces the scripted one
        assert_ne!(state.buildings(), skyline().as_slice());
    }

    #[test]
    fn test_player_two_throws_left() {
        let mut state = scripted(0.0);
        state.apply_verdict(Verdict::Building, None).unwrap();
        assert_eq!(state.active_player(), PlayerId::Second);

        let outcome = state.submit_throw(16.0, 100.0).unwrap();
        assert_eq!(outcome.verdict, Verdict::Player1);
        assert_eq!(outcome.hit_point, Some(IVec2::new(41, 137)));
        assert_eq!(state.scores(), (0, 1));
        assert_eq!(state.active_player(), PlayerId::First);
    }

    #[test]
    fn test_straight_up_throw_hits_thrower() {
        let mut state = scripted(0.0);
        let outcome = state.submit_throw(90.0, 20.0).unwrap();
        assert_eq!(outcome.verdict, Verdict::Player1);
        assert_eq!(outcome.scorer, Some(PlayerId::Second));
        assert_eq!(state.scores(), (0, 1));
        assert_eq!(state.active_player(), PlayerId::First);
    }

    #[test]
    fn test_scenario_b_three_hits_end_match() {
        let mut state = scripted(0.0);

        for expected in 1..=3 {
            // Player 1 misses, then player 2 lands a hit on player 1
            let miss = state.apply_verdict(Verdict::Building, None).unwrap();
            assert_eq!(miss.thrower, PlayerId::First);
            assert_eq!(state.active_player(), PlayerId::Second);

            let target = state.player(PlayerId::First).position;
            let outcome = state
                .apply_verdict(Verdict::Player1, Some(target))
                .unwrap();
            assert_eq!(outcome.thrower, PlayerId::Second);
            assert_eq!(outcome.scorer, Some(PlayerId::Second));
            assert_eq!(state.scores(), (0, expected));
        }

        assert_eq!(state.phase(), GamePhase::MatchOver);
        assert_eq!(state.winner(), Some(PlayerId::Second));

        let err = state.submit_throw(45.0, 50.0).unwrap_err();
        assert!(matches!(
            err,
            ThrowError::InvalidPhaseOperation {
                phase: GamePhase::MatchOver,
                ..
            }
        ));
        assert!(state.apply_verdict(Verdict::Player2, None).is_err());
        assert_eq!(state.scores(), (0, 3));
    }

    #[test]
    fn test_new_round_starts_without_old_explosion() {
        let mut state = scripted(0.0);
        let target = state.player(PlayerId::Second).position;
        let outcome = state
            .apply_verdict(Verdict::Player2, Some(target))
            .unwrap();
        assert_eq!(outcome.scorer, Some(PlayerId::First));
        assert_eq!(state.round(), 2);

        assert!(state.debris().is_empty());
        assert!(state.last_trajectory().is_empty());
        assert_eq!(state.last_verdict(), None);
        assert_eq!(state.last_hit_point(), None);
        let snapshot = state.snapshot();
        assert!(snapshot.debris.is_empty());
        assert!(snapshot.last_trajectory.is_empty());
    }

    #[test]
    fn test_scoring_throw_stays_replayable() {
        let mut state = scripted(0.0);
        state.submit_throw(16.0, 100.0).unwrap();
        assert_eq!(state.round(), 2);
        assert!(state.last_trajectory().is_empty());

        let frames: Vec<ReplayFrame> = state.replay_last_throw().collect();
        assert_eq!(frames.first(), Some(&ReplayFrame::Point(IVec2::new(38, 130))));
        assert_eq!(
            frames.last(),
            Some(&ReplayFrame::Impact(IVec2::new(595, 137)))
        );
    }

    #[test]
    fn test_scripted_layout_must_fit_screen() {
        let mut floating = skyline();
        floating[3].y -= 10;
        assert!(MatchState::with_layout(Settings::default(), 1, floating, 0.0).is_err());

        let mut wide = skyline();
        wide[7].width = 90;
        assert!(MatchState::with_layout(Settings::default(), 1, wide, 0.0).is_err());

        let small = Settings {
            screen_width: 400,
            ..Settings::default()
        };
        assert!(MatchState::with_layout(small, 1, skyline(), 0.0).is_err());
    }

    #[test]
    fn test_scripted_layout_announces_its_own_round() {
        let mut state = scripted(2.5);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::MatchStarted,
                GameEvent::RoundStarted {
                    round: 1,
                    leader: PlayerId::First
                },
            ]
        );
        assert_eq!(state.wind(), 2.5);
        assert_eq!(state.buildings(), skyline().as_slice());
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let mut state = scripted(0.0);
        let before = state.snapshot();

        let err = state.submit_throw(120.0, 50.0).unwrap_err();
        assert_eq!(err, ThrowError::InvalidInput(InputError::AngleOutOfRange(120.0)));
        assert!(state.submit_throw(45.0, f64::NAN).is_err());
        assert!(state.submit_throw(-0.5, 10.0).is_err());

        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_reset_restores_fresh_match() {
        let mut state = scripted(0.0);
        state.apply_verdict(Verdict::Player2, None).unwrap();
        state.apply_verdict(Verdict::Player1, None).unwrap();
        assert_eq!(state.scores(), (1, 1));

        state.reset_match();
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.phase(), GamePhase::AwaitingInput);
        assert_eq!(state.active_player(), PlayerId::First);
        assert_eq!(state.round(), 1);
        assert_eq!(state.winner(), None);
        assert!(state.last_trajectory().is_empty());
    }

    #[test]
    fn test_event_sequence_for_scoring_throw() {
        let mut state = scripted(0.0);
        state.drain_events();

        state.submit_throw(16.0, 100.0).unwrap();
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::ThrowStarted {
                    player: PlayerId::First,
                    angle: 16.0,
                    velocity: 100.0
                },
                GameEvent::Hit {
                    verdict: Verdict::Player2,
                    point: Some(IVec2::new(595, 137))
                },
                GameEvent::RoundEnded {
                    round: 1,
                    scorer: PlayerId::First
                },
                GameEvent::RoundStarted {
                    round: 2,
                    leader: PlayerId::Second
                },
            ]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_match_end_event() {
        let mut state = scripted(0.0);
        for _ in 0..3 {
            state.apply_verdict(Verdict::Player2, None).unwrap();
        }
        let events = state.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::MatchEnded {
                winner: PlayerId::First
            })
        );
    }

    #[test]
    fn test_zero_wind_limit_is_calm() {
        let settings = Settings {
            wind_limit: 0.0,
            ..Settings::default()
        };
        let state = MatchState::new(settings, 9).unwrap();
        assert_eq!(state.wind(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_rejected_throws_change_nothing(
            angle in prop_oneof![-1000.0f64..-0.001, 90.001f64..1000.0],
            velocity in 0.0f64..=100.0,
            repeats in 1usize..5,
        ) {
            let mut state = MatchState::new(Settings::default(), 5).unwrap();
            let before = state.snapshot();
            for _ in 0..repeats {
                prop_assert!(state.submit_throw(angle, velocity).is_err());
                prop_assert!(state.submit_throw(45.0, velocity + 100.5).is_err());
            }
            prop_assert_eq!(state.snapshot(), before);
        }

        #[test]
        fn prop_reset_always_returns_to_start(
            seed in any::<u64>(),
            throws in proptest::collection::vec((0.0f64..=90.0, 0.0f64..=100.0), 0..8),
        ) {
            let mut state = MatchState::new(Settings::default(), seed).unwrap();
            for (angle, velocity) in throws {
                // Throws after the match ends are rejected, which is fine here
                let _ = state.submit_throw(angle, velocity);
            }
            state.reset_match();
            prop_assert_eq!(state.scores(), (0, 0));
            prop_assert_eq!(state.phase(), GamePhase::AwaitingInput);
            prop_assert_eq!(state.active_player(), PlayerId::First);
        }
    }
}
