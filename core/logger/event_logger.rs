use super::{LogEntry, LogLevel, LogOutput, Logger};
use crate::events::EventChannel;
use std::sync::Arc;

/// Sends every entry to an [EventChannel] as an `Event::LogEvent`, preserving order.
///
#[derive(Clone, Debug)]
pub struct EventLogger {
    event_channel: Arc<EventChannel>,
}

impl EventLogger {
    pub fn new(event_channel: Arc<EventChannel>) -> Self {
        Self { event_channel }
    }
}

impl Logger for EventLogger {
    fn log(&self, text: &str, level: LogLevel, output: LogOutput) {
        self.event_channel.send(LogEntry::new(text, level, output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event::Event;

    #[test]
    fn sends_entries_in_the_order_they_are_logged() {
        let ec: Arc<EventChannel> = EventChannel::new().into();
        let consumer = ec.consumer();
        let logger = EventLogger::new(ec);

        logger.log("first", LogLevel::Compact, LogOutput::File);
        logger.log("second", LogLevel::Verbose, LogOutput::Console);

        assert_eq!(
            consumer.drain(),
            vec![
                Event::LogEvent(LogEntry::new("first", LogLevel::Compact, LogOutput::File)),
                Event::LogEvent(LogEntry::new(
                    "second",
                    LogLevel::Verbose,
                    LogOutput::Console
                )),
            ]
        );
    }
}
