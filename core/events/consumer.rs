use super::event::Event;
use crossbeam::deque::{Injector, Steal, Worker};
use std::sync::Arc;

pub struct EventConsumer {
    channel: Arc<Injector<Event>>,
    queue: Worker<Event>,
}

impl EventConsumer {
    pub fn new(channel: Arc<Injector<Event>>, queue: Worker<Event>) -> Self {
        Self { channel, queue }
    }

    /// Moves a batch of pending events from the channel into this consumer's local queue.
    pub fn fetch(&self) {
        let _steal = self.channel.steal_batch(&self.queue);
    }

    pub fn pop(&self) -> Option<Event> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        let _steal = self.channel.steal_batch(&self.queue);
        self.queue.is_empty()
    }

    /// Drains every event sent so far, in order.
    pub fn drain(&self) -> Vec<Event> {
        let mut events = vec![];
        loop {
            while let Some(event) = self.queue.pop() {
                events.push(event);
            }
            match self.channel.steal_batch(&self.queue) {
                Steal::Retry => continue,
                Steal::Empty if self.queue.is_empty() => break,
                _ => (),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::super::EventChannel;
    use super::*;

    #[test]
    fn new_event_consumer_is_empty_on_empty_channel() {
        let ec = EventChannel::new();
        let c = ec.consumer();
        assert!(c.is_empty());
        assert!(c.drain().is_empty());
    }

    #[quickcheck]
    fn event_consumer_needs_to_fetch_to_get_messages(event: Event) {
        let ec = EventChannel::new();
        let c = ec.consumer();
        ec.send(event);
        assert!(c.pop().is_none());
        c.fetch();
        assert!(c.pop().is_some());
    }

    #[quickcheck]
    fn drain_returns_everything_in_order(events: Vec<Event>) {
        let ec = EventChannel::new();
        let c = ec.consumer();
        for event in &events {
            ec.send(event.clone());
        }
        assert_eq!(c.drain(), events);
        assert!(ec.is_empty());
    }
}
