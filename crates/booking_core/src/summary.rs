use chrono::NaiveDate;
use shared::{
    domain::{SessionMedium, Step},
    protocol::{ConfirmationSummary, SESSION_DURATION_MINUTES},
};

use crate::selection::BookingSelection;

/// Builds the confirmation payload for a completed selection.
///
/// Returns `None` unless the selection is on `ReviewingSummary` with both a
/// counselor and a time. Pure: calling it never touches the selection.
pub fn project(selection: &BookingSelection) -> Option<ConfirmationSummary> {
    if selection.step() != Step::ReviewingSummary {
        return None;
    }
    let counselor = selection.counselor()?;
    let time = selection.time()?;

    Some(ConfirmationSummary {
        counselor_id: counselor.id,
        counselor_name: counselor.name.clone(),
        date: selection.date(),
        formatted_date: format_short_date(selection.date()),
        time: time.to_string(),
        duration_minutes: SESSION_DURATION_MINUTES,
        medium: SessionMedium::OnlineVideo,
    })
}

/// `10/18/2026`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `Sunday, October 18, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
