//! Destinations for confirmed bookings.

use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::ConfirmationSummary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("confirmation queue is full; please retry")]
    QueueFull,
    #[error("confirmation receiver disconnected")]
    Disconnected,
}

pub trait ConfirmationSink {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError>;
}

/// Writes each confirmation as a structured log record.
#[derive(Debug, Default)]
pub struct LogSink;

impl ConfirmationSink for LogSink {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError> {
        tracing::info!(
            counselor = %summary.counselor_name,
            date = %summary.formatted_date,
            time = %summary.time,
            duration_minutes = summary.duration_minutes,
            medium = summary.medium.label(),
            "session booked"
        );
        Ok(())
    }
}

/// Queues confirmations for whoever holds the receiving end.
pub struct ChannelSink {
    tx: Sender<ConfirmationSummary>,
}

impl ChannelSink {
    pub fn new(tx: Sender<ConfirmationSummary>) -> Self {
        Self { tx }
    }
}

impl ConfirmationSink for ChannelSink {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError> {
        match self.tx.try_send(summary.clone()) {
            Ok(()) => {
                tracing::debug!("queued booking confirmation");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(SinkError::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(SinkError::Disconnected),
        }
    }
}

/// Delivers to every inner sink, stopping at the first failure.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn ConfirmationSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl ConfirmationSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ConfirmationSink for FanoutSink {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError> {
        for sink in &mut self.sinks {
            sink.deliver(summary)?;
        }
        Ok(())
    }
}

impl<T: ConfirmationSink + ?Sized> ConfirmationSink for &mut T {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError> {
        (**self).deliver(summary)
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;
