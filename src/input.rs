//! The event side of the external graphics library.

use std::collections::VecDeque;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl Key {
    pub const DIRECTIONS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// `repeat` is set for the auto repeated presses of a held key
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
    Quit,
}

impl Event {
    pub fn press(key: Key) -> Event {
        Event::KeyDown { key, repeat: false }
    }

    pub fn release(key: Key) -> Event {
        Event::KeyUp { key, repeat: false }
    }
}

/// non blocking event queue
pub trait EventSource {
    fn poll_event(&mut self) -> Option<Event>;
}

/// replays a fixed list of events, one batch per frame
#[derive(Debug)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<Event>>,
    current: VecDeque<Event>,
    /// set once the current frame's batch is drained
    drained: bool,
}

impl ScriptedEvents {
    pub fn new() -> ScriptedEvents {
        ScriptedEvents {
            frames: VecDeque::new(),
            current: VecDeque::new(),
            drained: true,
        }
    }

    /// queues the events delivered during the next unscripted frame
    pub fn frame(mut self, events: Vec<Event>) -> ScriptedEvents {
        self.frames.push_back(events);
        self
    }

    /// `count` frames without input
    pub fn idle(mut self, count: usize) -> ScriptedEvents {
        for _ in 0..count {
            self.frames.push_back(Vec::new());
        }
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty() && self.current.is_empty()
    }
}

impl Default for ScriptedEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for ScriptedEvents {
    /// hands out one scripted frame per drain. after the script ends, the
    /// source keeps reporting `Quit`
    fn poll_event(&mut self) -> Option<Event> {
        if self.drained {
            self.drained = false;
            match self.frames.pop_front() {
                Some(batch) => self.current = batch.into(),
                None => return Some(Event::Quit),
            }
        }
        match self.current.pop_front() {
            Some(event) => Some(event),
            None => {
                self.drained = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(events: &mut impl EventSource) -> Vec<Event> {
        let mut out = Vec::new();
        while let Some(e) = events.poll_event() {
            out.push(e);
            if e == Event::Quit {
                break;
            }
        }
        out
    }

    #[test]
    fn script_is_delivered_frame_by_frame() {
        let mut events = ScriptedEvents::new()
            .frame(vec![Event::press(Key::Left)])
            .idle(1)
            .frame(vec![Event::release(Key::Left), Event::press(Key::Up)]);
        assert_eq!(drain(&mut events), vec![Event::press(Key::Left)]);
        assert_eq!(drain(&mut events), vec![]);
        assert_eq!(
            drain(&mut events),
            vec![Event::release(Key::Left), Event::press(Key::Up)]
        );
        assert!(events.is_exhausted());
        assert_eq!(drain(&mut events), vec![Event::Quit]);
    }
}
