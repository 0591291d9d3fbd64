//! Presentation sinks
//!
//! The session only queues [`GameEvent`]s; [`dispatch`] hands them to the HUD
//! and the haptics in order, at the end of the callback that produced them.

use crate::consts::{GAME_OVER_PATTERN_MS, PICKUP_PULSE_MS};
use crate::sim::{GameEvent, GamePhase};

use super::haptics::HapticSink;

/// HUD / screen updates
pub trait Presenter {
    fn on_phase_changed(&mut self, phase: GamePhase);
    fn on_score_changed(&mut self, score: u32);
    fn on_time_changed(&mut self, seconds: u32);
    fn on_game_ended(&mut self, final_score: u32);
    fn on_pause_state_changed(&mut self, paused: bool);
}

/// Deliver events to the presenter and the (optional) haptics
pub fn dispatch(
    events: &[GameEvent],
    presenter: &mut dyn Presenter,
    mut haptics: Option<&mut dyn HapticSink>,
) {
    for event in events {
        match *event {
            GameEvent::PhaseChanged(phase) => presenter.on_phase_changed(phase),
            GameEvent::ScoreChanged(score) => presenter.on_score_changed(score),
            GameEvent::TimeChanged(secs) => presenter.on_time_changed(secs),
            GameEvent::PauseChanged(paused) => presenter.on_pause_state_changed(paused),
            GameEvent::GameEnded { final_score } => {
                presenter.on_game_ended(final_score);
                if let Some(h) = haptics.as_deref_mut() {
                    h.pulse_pattern(&GAME_OVER_PATTERN_MS);
                }
            }
            GameEvent::Collected(_) => {
                if let Some(h) = haptics.as_deref_mut() {
                    h.pulse(PICKUP_PULSE_MS);
                }
            }
            // Gems appear through the frame snapshot
            GameEvent::Spawned(_) => {}
        }
    }
}

/// Presenter that only logs (native demo)
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn on_phase_changed(&mut self, phase: GamePhase) {
        log::info!("phase -> {}", phase.as_str());
    }

    fn on_score_changed(&mut self, score: u32) {
        log::debug!("score {}", score);
    }

    fn on_time_changed(&mut self, seconds: u32) {
        if seconds % 10 == 0 {
            log::info!("{}s left", seconds);
        }
    }

    fn on_game_ended(&mut self, final_score: u32) {
        log::info!("Game over! Final score: {}", final_score);
    }

    fn on_pause_state_changed(&mut self, paused: bool) {
        log::info!("paused: {}", paused);
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomPresenter;

#[cfg(target_arch = "wasm32")]
mod dom {
    use web_sys::Document;

    use super::Presenter;
    use crate::sim::GamePhase;

    /// Writes the HUD and toggles screens in the page
    pub struct DomPresenter {
        document: Document,
    }

    impl DomPresenter {
        pub fn new(document: Document) -> Self {
            Self { document }
        }

        fn set_text(&self, selector: &str, text: &str) {
            match self.document.query_selector(selector).ok().flatten() {
                Some(el) => el.set_text_content(Some(text)),
                None => log::warn!("HUD element {} missing", selector),
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            let Some(el) = self.document.get_element_by_id(id) else {
                log::warn!("Screen #{} missing", id);
                return;
            };
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    impl Presenter for DomPresenter {
        fn on_phase_changed(&mut self, phase: GamePhase) {
            match phase {
                GamePhase::Idle => {
                    self.set_hidden("game-over", true);
                    self.set_hidden("mobile-controls", true);
                    self.set_hidden("start-screen", false);
                }
                GamePhase::Playing => {
                    self.set_hidden("start-screen", true);
                    self.set_hidden("game-over", true);
                    self.set_hidden("mobile-controls", false);
                }
                GamePhase::Paused => {}
                GamePhase::Ended => {
                    self.set_hidden("mobile-controls", true);
                    self.set_hidden("game-over", false);
                }
            }
        }

        fn on_score_changed(&mut self, score: u32) {
            self.set_text("#score-display .value", &score.to_string());
        }

        fn on_time_changed(&mut self, seconds: u32) {
            self.set_text("#time-display .value", &seconds.to_string());
        }

        fn on_game_ended(&mut self, final_score: u32) {
            self.set_text("#final-score-value", &final_score.to_string());
        }

        fn on_pause_state_changed(&mut self, paused: bool) {
            self.set_text("#pause-btn", if paused { "▶️" } else { "⏸️" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CollectibleId;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Presenter for Recorder {
        fn on_phase_changed(&mut self, phase: GamePhase) {
            self.calls.push(format!("phase:{}", phase.as_str()));
        }
        fn on_score_changed(&mut self, score: u32) {
            self.calls.push(format!("score:{score}"));
        }
        fn on_time_changed(&mut self, seconds: u32) {
            self.calls.push(format!("time:{seconds}"));
        }
        fn on_game_ended(&mut self, final_score: u32) {
            self.calls.push(format!("ended:{final_score}"));
        }
        fn on_pause_state_changed(&mut self, paused: bool) {
            self.calls.push(format!("paused:{paused}"));
        }
    }

    #[derive(Default)]
    struct Buzz {
        pulses: Vec<u32>,
        patterns: Vec<Vec<u32>>,
    }

    impl HapticSink for Buzz {
        fn pulse(&mut self, duration_ms: u32) {
            self.pulses.push(duration_ms);
        }
        fn pulse_pattern(&mut self, pattern_ms: &[u32]) {
            self.patterns.push(pattern_ms.to_vec());
        }
    }

    #[test]
    fn test_dispatch_in_order() {
        let events = [
            GameEvent::Collected(CollectibleId(3)),
            GameEvent::ScoreChanged(10),
            GameEvent::TimeChanged(0),
            GameEvent::PhaseChanged(GamePhase::Ended),
            GameEvent::GameEnded { final_score: 10 },
        ];
        let mut hud = Recorder::default();
        let mut buzz = Buzz::default();
        dispatch(&events, &mut hud, Some(&mut buzz));

        assert_eq!(hud.calls, ["score:10", "time:0", "phase:ended", "ended:10"]);
        assert_eq!(buzz.pulses, [50]);
        assert_eq!(buzz.patterns, [vec![200, 100, 200]]);
    }

    #[test]
    fn test_no_haptics_same_hud() {
        let events = [
            GameEvent::Collected(CollectibleId(1)),
            GameEvent::ScoreChanged(10),
            GameEvent::PauseChanged(true),
        ];
        let mut with = Recorder::default();
        let mut without = Recorder::default();
        dispatch(&events, &mut with, Some(&mut crate::platform::NoHaptics));
        dispatch(&events, &mut without, None);
        assert_eq!(with.calls, without.calls);
    }
}
