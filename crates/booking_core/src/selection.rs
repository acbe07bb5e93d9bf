//! The booking aggregate under construction.

use chrono::NaiveDate;
use shared::{
    domain::{Counselor, Step},
    protocol::BookingSnapshot,
};

/// Only [`crate::StepController`] mutates a selection, so the fields stay
/// private and every write goes through a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSelection {
    step: Step,
    date: NaiveDate,
    counselor: Option<Counselor>,
    time: Option<String>,
}

impl BookingSelection {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            step: Step::ChoosingCounselor,
            date: today,
            counselor: None,
            time: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn counselor(&self) -> Option<&Counselor> {
        self.counselor.as_ref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn is_fresh(&self) -> bool {
        self.step == Step::ChoosingCounselor && self.counselor.is_none() && self.time.is_none()
    }

    /// Counselor only from `ChoosingTime` on, time only on `ReviewingSummary`.
    pub fn is_consistent(&self) -> bool {
        let counselor_ok = match self.step {
            Step::ChoosingCounselor => self.counselor.is_none(),
            Step::ChoosingTime | Step::ReviewingSummary => self.counselor.is_some(),
        };
        let time_ok = match self.step {
            Step::ReviewingSummary => self.time.is_some(),
            Step::ChoosingCounselor | Step::ChoosingTime => self.time.is_none(),
        };
        counselor_ok && time_ok
    }

    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            step: self.step,
            date: self.date,
            counselor: self.counselor.clone(),
            time: self.time.clone(),
        }
    }

    pub(crate) fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub(crate) fn enter_choosing_time(&mut self, counselor: Counselor) {
        self.counselor = Some(counselor);
        self.time = None;
        self.step = Step::ChoosingTime;
    }

    pub(crate) fn enter_reviewing_summary(&mut self, time: String) {
        self.time = Some(time);
        self.step = Step::ReviewingSummary;
    }

    /// Step back once, clearing whatever the abandoned step owned.
    pub(crate) fn retreat(&mut self) -> Option<Step> {
        let previous = self.step.previous()?;
        match self.step {
            Step::ReviewingSummary => self.time = None,
            Step::ChoosingTime => {
                self.counselor = None;
                self.time = None;
            }
            Step::ChoosingCounselor => {}
        }
        self.step = previous;
        Some(previous)
    }
}
