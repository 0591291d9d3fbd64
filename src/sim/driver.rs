//! Headless frame driver
//!
//! Runs the frame task and the 1 s countdown task from a single stream of
//! frame deltas. The browser build schedules the countdown with
//! `setInterval` instead; everything else (native demo, tests) goes through here.

use super::schedule::{Ticker, frame_delta_ms};
use super::session::GameSession;
use super::state::InputVector;
use crate::consts::COUNTDOWN_PERIOD_MS;

/// Owns a session plus the countdown clock
#[derive(Debug, Clone)]
pub struct Driver {
    session: GameSession,
    countdown: Ticker,
}

impl Driver {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            countdown: Ticker::new(COUNTDOWN_PERIOD_MS),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Start a round and restart the countdown period
    pub fn start(&mut self) -> bool {
        let started = self.session.start();
        if started {
            self.countdown.reset();
        }
        started
    }

    /// Restart from game over and restart the countdown period
    pub fn restart(&mut self) -> bool {
        let started = self.session.restart();
        if started {
            self.countdown.reset();
        }
        started
    }

    /// One display frame of `dt_secs`
    pub fn advance(&mut self, dt_secs: f32, input: InputVector) {
        self.session.frame(dt_secs, input);

        // The interval keeps running while paused; ticks are simply ignored
        let fires = self.countdown.advance(frame_delta_ms(dt_secs));
        for _ in 0..fires {
            self.session.tick_second();
        }
    }

    /// Run `frames` frames at a fixed delta with constant input
    pub fn run(&mut self, frames: u32, dt_secs: f32, input: InputVector) {
        for _ in 0..frames {
            self.advance(dt_secs, input);
        }
    }
}
