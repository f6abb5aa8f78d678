use crate::tick::Tick;

/// A timestamped diagnostic entry.
///
/// The controller never prints or panics; anything worth surfacing, such as
/// a refused mode switch, a statistical fallback or a failed fetch, lands
/// here tagged with a short kind string and the tick it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub tick: Tick,
    pub kind: &'static str,
    pub message: String,
}

/// Collects [`Event`]s until the host drains them.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, tick: Tick, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            tick,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Hands the accumulated events to the caller and leaves the bus empty.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
