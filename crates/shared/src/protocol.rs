use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Counselor, CounselorId, SessionMedium, Step},
    error::RejectionReport,
};

pub const SESSION_DURATION_MINUTES: u32 = 50;

/// Human-readable payload handed to the confirmation sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationSummary {
    pub counselor_id: CounselorId,
    pub counselor_name: String,
    pub date: NaiveDate,
    pub formatted_date: String,
    pub time: String,
    pub duration_minutes: u32,
    pub medium: SessionMedium,
}

/// Read-only view of the selection under construction, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSnapshot {
    pub step: Step,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counselor: Option<Counselor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BookingEvent {
    SelectionChanged { snapshot: BookingSnapshot },
    TransitionIgnored { report: RejectionReport },
    BookingConfirmed { summary: ConfirmationSummary },
    SinkFailed { message: String },
}
