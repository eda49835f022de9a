mod bus;
mod events;

pub use bus::EventBus;
pub use events::SessionEvent;

/// Trait for objects that want to observe session events.
pub trait EventHandler {
    fn handle_event(&mut self, event: &SessionEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SessionEvent),
{
    fn handle_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}
