//! Pointer input interpreter
//!
//! Maps raw pointer events to world commands: hold the left button to
//! vacuum, drag with the right button and release to spit. The interpreter
//! is a small state machine over the pointer, pure and platform-free; the
//! window loop feeds it events and drains one `TickInput` per tick.

use glam::Vec2;

use super::tick::{SpitCommand, TickInput};
use crate::consts::MIN_AIM_LENGTH;

/// Mouse buttons the world cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// A raw pointer event from the window loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Vec2),
    ButtonDown(PointerButton),
    ButtonUp(PointerButton),
}

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMode {
    Idle,
    /// Left button held; every tick vacuums toward the cursor
    Vacuuming,
    /// Right button held since pressing at `start`; releasing spits along
    /// `cursor - start`
    Aiming { start: Vec2 },
}

/// Pointer state machine producing per-tick input
#[derive(Debug, Clone)]
pub struct InputInterpreter {
    mode: PointerMode,
    cursor: Vec2,
    spit_count: usize,
    pending_spit: Option<SpitCommand>,
}

impl InputInterpreter {
    pub fn new(spit_count: usize) -> Self {
        Self {
            mode: PointerMode::Idle,
            cursor: Vec2::ZERO,
            spit_count,
            pending_spit: None,
        }
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// The in-progress drag as (start, cursor), while aiming
    pub fn aim(&self) -> Option<(Vec2, Vec2)> {
        match self.mode {
            PointerMode::Aiming { start } => Some((start, self.cursor)),
            _ => None,
        }
    }

    /// Feed one pointer event into the state machine.
    ///
    /// Gestures only begin from `Idle`; a button release is only honored in
    /// its matching state, so overlapping button chords are ignored rather
    /// than corrupting an in-progress gesture.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => self.cursor = pos,
            PointerEvent::ButtonDown(PointerButton::Left) => {
                if self.mode == PointerMode::Idle {
                    self.mode = PointerMode::Vacuuming;
                }
            }
            PointerEvent::ButtonUp(PointerButton::Left) => {
                if self.mode == PointerMode::Vacuuming {
                    self.mode = PointerMode::Idle;
                }
            }
            PointerEvent::ButtonDown(PointerButton::Right) => {
                if self.mode == PointerMode::Idle {
                    self.mode = PointerMode::Aiming { start: self.cursor };
                }
            }
            PointerEvent::ButtonUp(PointerButton::Right) => {
                if let PointerMode::Aiming { start } = self.mode {
                    self.mode = PointerMode::Idle;
                    let aim_vector = self.cursor - start;
                    // A click without a drag has no direction to spit in
                    if aim_vector.length() > MIN_AIM_LENGTH {
                        if let Some(direction) = aim_vector.try_normalize() {
                            self.pending_spit = Some(SpitCommand {
                                origin: start,
                                direction,
                                count: self.spit_count,
                            });
                        }
                    }
                }
            }
        }
    }

    /// Build the input for the next tick, consuming any completed spit
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            pointer: self.cursor,
            vacuum: self.mode == PointerMode::Vacuuming,
            spit: self.pending_spit.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_button_toggles_vacuuming() {
        let mut interp = InputInterpreter::new(3);
        assert_eq!(interp.mode(), PointerMode::Idle);

        interp.apply(PointerEvent::Moved(Vec2::new(50.0, 60.0)));
        interp.apply(PointerEvent::ButtonDown(PointerButton::Left));
        assert_eq!(interp.mode(), PointerMode::Vacuuming);

        let input = interp.tick_input();
        assert!(input.vacuum);
        assert_eq!(input.pointer, Vec2::new(50.0, 60.0));

        interp.apply(PointerEvent::ButtonUp(PointerButton::Left));
        assert_eq!(interp.mode(), PointerMode::Idle);
        assert!(!interp.tick_input().vacuum);
    }

    #[test]
    fn test_drag_release_spits_normalized_aim() {
        // Press at (100,100), drag to (100,50), release: aim (0,-50),
        // direction (0,-1)
        let mut interp = InputInterpreter::new(3);
        interp.apply(PointerEvent::Moved(Vec2::new(100.0, 100.0)));
        interp.apply(PointerEvent::ButtonDown(PointerButton::Right));
        assert_eq!(
            interp.mode(),
            PointerMode::Aiming {
                start: Vec2::new(100.0, 100.0)
            }
        );

        interp.apply(PointerEvent::Moved(Vec2::new(100.0, 50.0)));
        assert_eq!(
            interp.aim(),
            Some((Vec2::new(100.0, 100.0), Vec2::new(100.0, 50.0)))
        );

        interp.apply(PointerEvent::ButtonUp(PointerButton::Right));
        let input = interp.tick_input();
        let cmd = input.spit.expect("drag release should queue a spit");
        assert_eq!(cmd.origin, Vec2::new(100.0, 100.0));
        assert_eq!(cmd.direction, Vec2::new(0.0, -1.0));
        assert_eq!(cmd.count, 3);

        // Consumed: the next tick has no spit
        assert!(interp.tick_input().spit.is_none());
    }

    #[test]
    fn test_click_without_drag_skips_spit() {
        let mut interp = InputInterpreter::new(3);
        interp.apply(PointerEvent::Moved(Vec2::new(200.0, 200.0)));
        interp.apply(PointerEvent::ButtonDown(PointerButton::Right));
        interp.apply(PointerEvent::ButtonUp(PointerButton::Right));
        assert!(interp.tick_input().spit.is_none());
    }

    #[test]
    fn test_gestures_only_start_from_idle() {
        let mut interp = InputInterpreter::new(3);
        interp.apply(PointerEvent::Moved(Vec2::new(10.0, 10.0)));
        interp.apply(PointerEvent::ButtonDown(PointerButton::Right));

        // Left press while aiming is ignored
        interp.apply(PointerEvent::ButtonDown(PointerButton::Left));
        assert!(matches!(interp.mode(), PointerMode::Aiming { .. }));

        // Stray left release does not cancel the aim either
        interp.apply(PointerEvent::ButtonUp(PointerButton::Left));
        assert!(matches!(interp.mode(), PointerMode::Aiming { .. }));

        interp.apply(PointerEvent::Moved(Vec2::new(40.0, 10.0)));
        interp.apply(PointerEvent::ButtonUp(PointerButton::Right));
        assert_eq!(interp.mode(), PointerMode::Idle);
        assert!(interp.tick_input().spit.is_some());
    }

    #[test]
    fn test_vacuuming_ignores_right_button() {
        let mut interp = InputInterpreter::new(3);
        interp.apply(PointerEvent::ButtonDown(PointerButton::Left));
        interp.apply(PointerEvent::ButtonDown(PointerButton::Right));
        assert_eq!(interp.mode(), PointerMode::Vacuuming);
        interp.apply(PointerEvent::ButtonUp(PointerButton::Right));
        assert_eq!(interp.mode(), PointerMode::Vacuuming);
    }
}
