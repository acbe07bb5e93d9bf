use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CounselorId, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    InvalidSelection,
    IllegalTransition,
}

/// Why a booking transition left the selection untouched.
///
/// These are values, not failures: every transition that produces one is a
/// no-op and callers are free to drop it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("counselor {0} is not available")]
    CounselorUnavailable(CounselorId),
    #[error("no counselor with id {0}")]
    UnknownCounselor(CounselorId),
    #[error("time slot {0} is not available")]
    SlotUnavailable(String),
    #[error("no time slot labelled {0}")]
    UnknownSlot(String),
    #[error("{date} is before today ({today})")]
    PastDate { date: NaiveDate, today: NaiveDate },
    #[error("{action} is not allowed while {step:?}")]
    WrongStep { action: &'static str, step: Step },
    #[error("selection is incomplete")]
    Incomplete,
    #[error("selection went stale: {0}")]
    StaleSelection(String),
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::WrongStep { .. } | Rejection::Incomplete => {
                RejectionKind::IllegalTransition
            }
            Rejection::CounselorUnavailable(_)
            | Rejection::UnknownCounselor(_)
            | Rejection::SlotUnavailable(_)
            | Rejection::UnknownSlot(_)
            | Rejection::PastDate { .. }
            | Rejection::StaleSelection(_) => RejectionKind::InvalidSelection,
        }
    }
}

/// Serializable form of a [`Rejection`] for outbound event streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionReport {
    pub kind: RejectionKind,
    pub message: String,
}

impl From<&Rejection> for RejectionReport {
    fn from(value: &Rejection) -> Self {
        Self {
            kind: value.kind(),
            message: value.to_string(),
        }
    }
}
