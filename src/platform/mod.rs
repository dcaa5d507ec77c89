//! Platform abstraction layer
//!
//! Turns raw device events (key presses, pointer/touch movement) into the
//! abstract per-tick intent the simulation consumes.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Pause,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            " " | "Space" => Some(Key::Fire),
            "Escape" | "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// Accumulated device state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
    /// Pause requested since the last tick
    pause: bool,
    /// Latest pointer/touch position, consumed by the next tick
    pointer: Option<Vec2>,
    /// Touch contact acts as fire
    touching: bool,
    pub idle_mode: bool,
}

impl InputState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Fire => self.fire = true,
            Key::Pause => self.pause = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            Key::Fire => self.fire = false,
            Key::Pause => {}
        }
    }

    /// Pointer or touch moved to `pos` in play-field coordinates
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn touch_start(&mut self, pos: Vec2) {
        self.touching = true;
        self.pointer = Some(pos);
    }

    pub fn touch_end(&mut self) {
        self.touching = false;
    }

    /// Focus lost: release everything so the craft does not drift
    pub fn release_all(&mut self) {
        let idle_mode = self.idle_mode;
        *self = Self {
            idle_mode,
            ..Default::default()
        };
    }

    /// Snapshot the intent for one tick and clear one-shot inputs
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            fire: self.fire || self.touching,
            pause: self.pause,
            pointer: self.pointer,
            idle_mode: self.idle_mode,
        };
        self.pause = false;
        self.pointer = None;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist() {
        let mut input = InputState::default();
        input.key_down(Key::from_name("ArrowLeft").unwrap());
        input.key_down(Key::Fire);
        let tick = input.take_tick_input();
        assert!(tick.left && tick.fire);
        let tick = input.take_tick_input();
        assert!(tick.left && tick.fire);

        input.key_up(Key::Left);
        assert!(!input.take_tick_input().left);
    }

    #[test]
    fn test_pause_is_one_shot() {
        let mut input = InputState::default();
        input.key_down(Key::from_name("Escape").unwrap());
        assert!(input.take_tick_input().pause);
        assert!(!input.take_tick_input().pause);
    }

    #[test]
    fn test_pointer_consumed() {
        let mut input = InputState::default();
        input.touch_start(Vec2::new(10.0, 20.0));
        let tick = input.take_tick_input();
        assert_eq!(tick.pointer, Some(Vec2::new(10.0, 20.0)));
        assert!(tick.fire);
        assert_eq!(input.take_tick_input().pointer, None);

        input.touch_end();
        assert!(!input.take_tick_input().fire);
    }

    #[test]
    fn test_release_all_keeps_idle_mode() {
        let mut input = InputState {
            idle_mode: true,
            ..Default::default()
        };
        input.key_down(Key::Right);
        input.release_all();
        let tick = input.take_tick_input();
        assert!(!tick.right);
        assert!(tick.idle_mode);
        assert_eq!(Key::from_name("q"), None);
    }
}
