//! Virtual joystick
//!
//! Turns a touch position relative to the joystick base into a direction on
//! the ground plane. Screen y maps to world z (down the screen = toward the
//! camera).

use glam::Vec2;

use crate::consts::JOYSTICK_KNOB_RADIUS;
use crate::sim::InputVector;

#[derive(Debug, Clone)]
pub struct Joystick {
    /// Center of the base in client coordinates
    origin: Vec2,
    /// Largest knob displacement (px)
    max_radius: f32,
    active: bool,
    /// Clamped knob displacement (px)
    offset: Vec2,
    jump_pending: bool,
}

impl Joystick {
    pub fn new(origin: Vec2, max_radius: f32) -> Self {
        Self {
            origin,
            max_radius: max_radius.max(1.0),
            active: false,
            offset: Vec2::ZERO,
            jump_pending: false,
        }
    }

    /// Joystick for a base element of the given bounding box
    pub fn for_base(left: f32, top: f32, width: f32, height: f32) -> Self {
        let origin = Vec2::new(left + width / 2.0, top + height / 2.0);
        Self::new(origin, width / 2.0 - JOYSTICK_KNOB_RADIUS)
    }

    /// Re-measure the base (layout can move between touches)
    pub fn set_base(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.origin = Vec2::new(left + width / 2.0, top + height / 2.0);
        self.max_radius = (width / 2.0 - JOYSTICK_KNOB_RADIUS).max(1.0);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Knob offset from the base center, for the visual stick
    pub fn knob_offset(&self) -> Vec2 {
        self.offset
    }

    /// Finger down on the base
    pub fn press(&mut self, point: Vec2) {
        self.active = true;
        self.drag(point);
    }

    /// Finger moved; ignored unless pressed
    pub fn drag(&mut self, point: Vec2) {
        if !self.active {
            return;
        }
        let delta = point - self.origin;
        let distance = delta.length();
        self.offset = if distance > self.max_radius {
            delta / distance * self.max_radius
        } else {
            delta
        };
    }

    /// Finger lifted: stick recenters
    pub fn release(&mut self) {
        self.active = false;
        self.offset = Vec2::ZERO;
    }

    /// Current direction, zero when idle
    pub fn sample(&self) -> InputVector {
        if !self.active {
            return InputVector::ZERO;
        }
        InputVector::clamped(self.offset / self.max_radius)
    }

    /// Jump button pressed
    pub fn press_jump(&mut self) {
        self.jump_pending = true;
    }

    /// Consume a pending jump press (edge-triggered)
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stick() -> Joystick {
        // 120 px base at (0, 0): center (60, 60), throw 35 px
        Joystick::for_base(0.0, 0.0, 120.0, 120.0)
    }

    #[test]
    fn test_idle_is_zero() {
        let mut j = stick();
        j.drag(Vec2::new(100.0, 60.0));
        assert_eq!(j.sample(), InputVector::ZERO);
        assert!(!j.is_active());
    }

    #[test]
    fn test_half_throw() {
        let mut j = stick();
        j.press(Vec2::new(60.0 + 17.5, 60.0));
        let v = j.sample();
        assert!((v.x - 0.5).abs() < 1e-5);
        assert!(v.z.abs() < 1e-5);
    }

    #[test]
    fn test_screen_down_is_positive_z() {
        let mut j = stick();
        j.press(Vec2::new(60.0, 200.0));
        let v = j.sample();
        assert!((v.z - 1.0).abs() < 1e-5);
        assert!((j.knob_offset().y - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_release_recenters() {
        let mut j = stick();
        j.press(Vec2::new(0.0, 0.0));
        j.release();
        assert_eq!(j.sample(), InputVector::ZERO);
        assert_eq!(j.knob_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_unmeasured_base_remeasured_on_touch() {
        let mut j = Joystick::for_base(0.0, 0.0, 0.0, 0.0);
        assert_eq!(j.sample(), InputVector::ZERO);

        j.set_base(0.0, 0.0, 120.0, 120.0);
        j.press(Vec2::new(60.0 + 17.5, 60.0));
        assert!((j.sample().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut j = stick();
        j.press_jump();
        j.press_jump();
        assert!(j.take_jump());
        assert!(!j.take_jump());
    }

    proptest! {
        #[test]
        fn prop_long_drag_keeps_direction(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let mut j = stick();
            let delta = Vec2::new(x, y);
            prop_assume!(delta.length() > 35.0);

            j.press(Vec2::new(60.0, 60.0) + delta);
            let v = j.sample().as_vec2();
            prop_assert!(v.length() <= 1.0 + 1e-4);
            prop_assert!((v.length() - 1.0).abs() < 1e-3);
            // Same direction as the raw drag
            prop_assert!(v.normalize().dot(delta.normalize()) > 0.9999);
        }
    }
}
