//! Notifications for listeners outside the generator.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelEvent {
    /// The player's spawn position is final. Fired once per generated level.
    PlayerSpawned,
}

pub trait EventSink {
    fn emit(&mut self, event: LevelEvent);
}

impl EventSink for Vec<LevelEvent> {
    fn emit(&mut self, event: LevelEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvents;

impl EventSink for NoEvents {
    fn emit(&mut self, _event: LevelEvent) {}
}
