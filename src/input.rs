use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::HOLD_WINDOW_FRAMES;

/// Intents latched by the input side and consumed once per frame by the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_dir: i32,
    pub fire_pressed: bool,
    pub quit_requested: bool,
}

impl InputState {
    /// Reads and clears the fire latch.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_pressed)
    }
}

/// Folds crossterm key events into an `InputState`.
///
/// Terminals without keyboard enhancement never report releases, so a held
/// key is one whose last press or repeat arrived within `HOLD_WINDOW_FRAMES`.
pub struct KeyboardInput {
    left: Option<u64>,
    right: Option<u64>,
    release_events: bool,
    state: InputState,
}

impl KeyboardInput {
    pub fn new(release_events: bool) -> Self {
        KeyboardInput { left: None, right: None, release_events, state: InputState::default() }
    }

    pub fn handle_event(&mut self, event: &Event, frame: u64) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        let pressed = matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat);
        let seen = if pressed { Some(frame) } else { None };
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.left = seen,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.right = seen,
            KeyCode::Char(' ') => {
                let fires_on = if self.release_events { KeyEventKind::Release } else { KeyEventKind::Press };
                if *kind == fires_on {
                    self.state.fire_pressed = true;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') if pressed => {
                self.state.quit_requested = true;
            }
            KeyCode::Char('c') if pressed && modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.quit_requested = true;
            }
            _ => {}
        }
    }

    /// Current intents with the movement direction refreshed for `frame`.
    pub fn state(&mut self, frame: u64) -> &mut InputState {
        let left = self.is_held(self.left, frame) as i32;
        let right = self.is_held(self.right, frame) as i32;
        self.state.move_dir = right - left;
        &mut self.state
    }

    fn is_held(&self, last_seen: Option<u64>, frame: u64) -> bool {
        match last_seen {
            Some(_) if self.release_events => true,
            Some(seen) => frame.saturating_sub(seen) <= HOLD_WINDOW_FRAMES,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent { code, modifiers: KeyModifiers::NONE, kind, state: KeyEventState::NONE })
    }

    #[test]
    fn fire_latch_is_consumed_once() {
        let mut state = InputState { fire_pressed: true, ..InputState::default() };
        assert!(state.take_fire());
        assert!(!state.take_fire());
    }

    #[test]
    fn held_keys_expire_without_repeats() {
        let mut input = KeyboardInput::new(false);
        input.handle_event(&key(KeyCode::Left, KeyEventKind::Press), 10);
        assert_eq!(input.state(10).move_dir, -1);
        assert_eq!(input.state(10 + HOLD_WINDOW_FRAMES).move_dir, -1);
        assert_eq!(input.state(11 + HOLD_WINDOW_FRAMES).move_dir, 0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = KeyboardInput::new(true);
        input.handle_event(&key(KeyCode::Left, KeyEventKind::Press), 0);
        input.handle_event(&key(KeyCode::Right, KeyEventKind::Press), 0);
        assert_eq!(input.state(100).move_dir, 0);
        input.handle_event(&key(KeyCode::Left, KeyEventKind::Release), 101);
        assert_eq!(input.state(101).move_dir, 1);
    }

    #[test]
    fn fire_latches_on_release_when_reported() {
        let mut input = KeyboardInput::new(true);
        input.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), 0);
        assert!(!input.state(0).fire_pressed);
        input.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Release), 1);
        assert!(input.state(1).take_fire());
        assert!(!input.state(2).fire_pressed);
    }

    #[test]
    fn fire_latches_on_press_without_releases() {
        let mut input = KeyboardInput::new(false);
        input.handle_event(&Event::Key(KeyCode::Char(' ').into()), 0);
        assert!(input.state(0).fire_pressed);
    }

    #[test]
    fn escape_requests_quit() {
        let mut input = KeyboardInput::new(false);
        input.handle_event(&Event::Key(KeyCode::Esc.into()), 0);
        assert!(input.state(0).quit_requested);
    }
}
