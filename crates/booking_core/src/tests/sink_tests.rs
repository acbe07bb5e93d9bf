use super::*;

use chrono::NaiveDate;
use crossbeam_channel::bounded;
use shared::domain::{CounselorId, SessionMedium};

use crate::ledger::AppointmentLedger;

fn summary() -> ConfirmationSummary {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).expect("date");
    ConfirmationSummary {
        counselor_id: CounselorId(1),
        counselor_name: "Dr. Sarah Johnson".into(),
        date,
        formatted_date: "10/18/2026".into(),
        time: "09:00 AM".into(),
        duration_minutes: 50,
        medium: SessionMedium::OnlineVideo,
    }
}

#[test]
fn log_sink_always_accepts() {
    LogSink.deliver(&summary()).expect("deliver");
}

#[test]
fn channel_sink_hands_summary_to_receiver() {
    let (tx, rx) = bounded(1);
    let mut sink = ChannelSink::new(tx);
    sink.deliver(&summary()).expect("deliver");
    assert_eq!(rx.try_recv().expect("queued"), summary());
}

#[test]
fn channel_sink_reports_full_queue() {
    let (tx, _rx) = bounded(1);
    let mut sink = ChannelSink::new(tx);
    sink.deliver(&summary()).expect("first fits");
    assert!(matches!(sink.deliver(&summary()), Err(SinkError::QueueFull)));
}

#[test]
fn channel_sink_reports_disconnected_receiver() {
    let (tx, rx) = bounded(1);
    drop(rx);
    let mut sink = ChannelSink::new(tx);
    assert!(matches!(
        sink.deliver(&summary()),
        Err(SinkError::Disconnected)
    ));
}

#[test]
fn fanout_delivers_to_each_sink_in_order() {
    let (tx, rx) = bounded(2);
    let mut sink = FanoutSink::new()
        .with(LogSink)
        .with(ChannelSink::new(tx.clone()))
        .with(ChannelSink::new(tx));
    assert_eq!(sink.len(), 3);

    sink.deliver(&summary()).expect("deliver");
    assert_eq!(rx.len(), 2);
}

#[test]
fn fanout_stops_at_first_failure() {
    let (closed_tx, closed_rx) = bounded(1);
    drop(closed_rx);
    let (tx, rx) = bounded(1);
    let mut sink = FanoutSink::new()
        .with(ChannelSink::new(closed_tx))
        .with(ChannelSink::new(tx));

    let err = sink.deliver(&summary()).expect_err("refused");
    assert_eq!(err.to_string(), "confirmation receiver disconnected");
    assert!(rx.is_empty());
}

#[test]
fn borrowed_sinks_deliver_through_the_reference() {
    fn deliver_twice(mut sink: impl ConfirmationSink) {
        sink.deliver(&summary()).expect("first");
        sink.deliver(&summary()).expect("second");
    }

    let mut ledger = AppointmentLedger::new();
    deliver_twice(&mut ledger);
    assert_eq!(ledger.all().len(), 2);
}
