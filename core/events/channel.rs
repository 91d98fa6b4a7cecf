use super::event::Event;
use super::EventConsumer;
use crossbeam::deque::{Injector, Worker};
use std::sync::Arc;

/// A multi-producer queue of [Event]s. Clones share the same underlying bus.
///
#[derive(Clone, Debug, Default)]
pub struct EventChannel {
    bus: Arc<Injector<Event>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bus.is_empty()
    }

    pub fn send<E>(&self, event: E)
    where
        E: Into<Event>,
    {
        self.bus.push(event.into())
    }

    pub fn consumer(&self) -> EventConsumer {
        EventConsumer::new(self.bus.clone(), Worker::new_fifo())
    }
}
