//! Game session: the state machine and the two callback bodies
//!
//! All mutation of score, timer, player and gems happens through
//! [`GameSession::frame`] (once per display frame), [`GameSession::tick_second`]
//! (once per real second) and the user transitions. Each call runs to
//! completion, so no locking is involved.

use super::collision;
use super::movement;
use super::registry::Registry;
use super::schedule::{DelayQueue, frame_delta_ms};
use super::state::{Collectible, GameEvent, GamePhase, GameState, InputVector, Player};
use crate::GameConfig;

/// A replacement gem waiting to appear.
///
/// Tagged with the round that scheduled it; it only applies if that round is
/// still being played when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RespawnTicket {
    round: u32,
}

/// One player's run of the game, from menu through any number of rounds
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    player: Player,
    registry: Registry,
    respawns: DelayQueue<RespawnTicket>,
    /// Milliseconds spent in Playing, across all rounds (never reset)
    play_clock_ms: f64,
    /// Frames simulated in the current round
    play_frames: u64,
    /// Incremented on every start
    round: u32,
    jump_requested: bool,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session sitting on the start screen
    pub fn new(config: GameConfig, seed: u64) -> Self {
        if !config.spawn_area_fits() {
            log::warn!(
                "Spawn extent {} does not fit arena {}",
                config.spawn_half_extent,
                config.arena_half_width
            );
        }
        Self {
            state: GameState {
                score: 0,
                time_remaining: config.game_duration_secs,
                phase: GamePhase::Idle,
            },
            player: Player::at_origin(config.ground_level),
            registry: Registry::new(seed, &config),
            respawns: DelayQueue::new(),
            play_clock_ms: 0.0,
            play_frames: 0,
            round: 0,
            jump_requested: false,
            events: Vec::new(),
            config,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.state.time_remaining
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn collectibles(&self) -> &[Collectible] {
        self.registry.collectibles()
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    pub fn play_frames(&self) -> u64 {
        self.play_frames
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// The 1 s countdown only needs to run during a round
    pub fn countdown_running(&self) -> bool {
        matches!(self.state.phase, GamePhase::Playing | GamePhase::Paused)
    }

    /// Take everything that happened since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Transitions ===

    /// Begin a round. Valid from Idle or Ended.
    pub fn start(&mut self) -> bool {
        if !matches!(self.state.phase, GamePhase::Idle | GamePhase::Ended) {
            log::debug!("start ignored in {:?}", self.state.phase);
            return false;
        }

        self.round += 1;
        self.state.score = 0;
        self.state.time_remaining = self.config.game_duration_secs;
        self.player = Player::at_origin(self.config.ground_level);
        self.play_frames = 0;
        self.jump_requested = false;

        let ids = self.registry.spawn_collectibles(self.config.collectible_count);
        self.set_phase(GamePhase::Playing);

        self.events.push(GameEvent::ScoreChanged(0));
        self.events
            .push(GameEvent::TimeChanged(self.state.time_remaining));
        self.events.extend(ids.into_iter().map(GameEvent::Spawned));

        log::info!(
            "Round {} started: {}s, {} gems",
            self.round,
            self.state.time_remaining,
            self.registry.len()
        );

        // A zero-length round is over before it begins
        if self.state.time_remaining == 0 {
            self.end();
        }
        true
    }

    /// Flip between Playing and Paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        let next = match self.state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => {
                log::debug!("pause toggle ignored in {:?}", other);
                return false;
            }
        };
        self.jump_requested = false;
        self.set_phase(next);
        self.events
            .push(GameEvent::PauseChanged(next == GamePhase::Paused));
        log::info!("{}", if next == GamePhase::Paused { "Paused" } else { "Resumed" });
        true
    }

    /// Play again from the game-over screen
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::Ended {
            log::debug!("restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.start()
    }

    /// Back to the start screen. The last score stays on display until the next start.
    pub fn return_to_menu(&mut self) -> bool {
        if self.state.phase != GamePhase::Ended {
            log::debug!("menu ignored in {:?}", self.state.phase);
            return false;
        }
        self.set_phase(GamePhase::Idle);
        true
    }

    /// Queue a jump for the next frame. Only while playing and on the ground.
    pub fn request_jump(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing || self.player.is_jumping {
            return false;
        }
        self.jump_requested = true;
        true
    }

    // === Callbacks ===

    /// Frame task: respawns that came due, then movement, then pickups.
    ///
    /// Returns `false` (and changes nothing) unless Playing.
    pub fn frame(&mut self, dt_secs: f32, input: InputVector) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }

        self.play_clock_ms += frame_delta_ms(dt_secs);
        self.play_frames += 1;

        self.apply_due_respawns();

        let jump = std::mem::take(&mut self.jump_requested);
        self.player = movement::step(&self.player, input, jump, &self.config);

        let pickups = collision::collect(
            self.player.pos,
            self.registry.collectibles(),
            self.config.pickup_radius,
            self.config.pickup_points,
        );
        if !pickups.is_empty() {
            let mut gained = 0u32;
            for id in pickups.removed {
                if !self.registry.remove_collectible(id) {
                    continue;
                }
                gained += self.config.pickup_points;
                self.events.push(GameEvent::Collected(id));
                self.respawns.schedule(
                    self.play_clock_ms,
                    self.config.respawn_delay_ms,
                    RespawnTicket { round: self.round },
                );
            }
            if gained > 0 {
                self.state.score = self.state.score.saturating_add(gained);
                self.events.push(GameEvent::ScoreChanged(self.state.score));
                log::debug!("+{} -> {}", gained, self.state.score);
            }
        }

        true
    }

    /// Countdown task: one elapsed second. Ends the round at zero.
    pub fn tick_second(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing || self.state.time_remaining == 0 {
            return false;
        }
        self.state.time_remaining -= 1;
        self.events
            .push(GameEvent::TimeChanged(self.state.time_remaining));
        if self.state.time_remaining == 0 {
            self.end();
        }
        true
    }

    fn end(&mut self) {
        self.jump_requested = false;
        self.registry.clear();
        self.set_phase(GamePhase::Ended);
        self.events.push(GameEvent::GameEnded {
            final_score: self.state.score,
        });
        log::info!("Round {} over, final score {}", self.round, self.state.score);
    }

    fn apply_due_respawns(&mut self) {
        for ticket in self.respawns.pop_due(self.play_clock_ms) {
            // Stale ticket from an earlier round
            if ticket.round != self.round || self.state.phase != GamePhase::Playing {
                log::debug!("Dropped respawn from round {}", ticket.round);
                continue;
            }
            let id = self.registry.spawn_one();
            self.events.push(GameEvent::Spawned(id));
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.state.phase != phase {
            self.state.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }
}
