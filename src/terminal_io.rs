use std::collections::HashMap;
use std::io;
use crossterm::event::{Event, KeyCode};

// --- SimulatedInput for debugging ---
pub struct SimulatedInput {
    events: HashMap<u64, Event>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Event>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    /// Sweeps right while firing, then left, then quits.
    pub fn demo_script() -> Self {
        let mut events = HashMap::new();
        for frame in (1..60).step_by(3) {
            events.insert(frame, Event::Key(KeyCode::Right.into()));
        }
        for frame in (60..120).step_by(3) {
            events.insert(frame, Event::Key(KeyCode::Left.into()));
        }
        for frame in (2..120).step_by(15) {
            events.insert(frame, Event::Key(KeyCode::Char(' ').into()));
        }
        events.insert(150, Event::Key(KeyCode::Char('q').into()));
        SimulatedInput::new(events)
    }

    pub fn poll(&mut self, frame_count: u64) -> io::Result<bool> {
        self.current_frame = frame_count;
        Ok(self.events.contains_key(&frame_count))
    }

    pub fn read(&mut self) -> io::Result<Event> {
        if let Some(event) = self.events.remove(&self.current_frame) {
            Ok(event)
        } else {
            Ok(Event::Key(KeyCode::Null.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_events_on_their_frame_once() {
        let mut events = HashMap::new();
        events.insert(3, Event::Key(KeyCode::Left.into()));
        let mut input = SimulatedInput::new(events);

        assert!(!input.poll(2).unwrap());
        assert!(input.poll(3).unwrap());
        assert_eq!(input.read().unwrap(), Event::Key(KeyCode::Left.into()));
        assert!(!input.poll(3).unwrap());
    }

    #[test]
    fn demo_script_ends_with_quit() {
        let mut input = SimulatedInput::demo_script();
        assert!(input.poll(150).unwrap());
        assert_eq!(input.read().unwrap(), Event::Key(KeyCode::Char('q').into()));
    }
}
