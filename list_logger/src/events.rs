use core::fmt::Display;

use alloc::{string::String, vec::Vec};
use log::Level;
use spin::Mutex;

pub static LOG: Mutex<EventLog> = Mutex::new(EventLog::new());

/// A [`Store`](crate::Store) that appends to the global [`LOG`].
pub fn store(text: &str, level: Level) {
    LOG.lock().push(text, level);
}

/// Runs a closure referencing the global event log
pub fn with_log<F, R>(f: F) -> R
where
    F: FnOnce(&EventLog) -> R,
{
    f(&LOG.lock())
}

pub struct EventLog {
    events: Vec<Event>,
    sequence: usize,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, text: &str, level: Level) {
        let event = Event {
            text: String::from(text),
            sequence: self.sequence,
            level,
        };
        self.sequence += 1;
        self.events.push(event);
    }

    pub fn get_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Drops recorded events; sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

pub struct Event {
    text: String,
    sequence: usize,
    pub level: Level,
}

impl Event {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn sequence(&self) -> usize {
        self.sequence
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{}, {:?}: {}",
            self.sequence, self.level, self.text,
        ))
    }
}
