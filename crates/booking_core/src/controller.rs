//! Transition functions over [`BookingSelection`].
//!
//! Every transition either applies completely or leaves the selection
//! untouched and reports why as a [`Rejection`]. Nothing here panics or
//! returns an error for an illegal call.

use chrono::NaiveDate;
use shared::{
    domain::{Counselor, CounselorId, Step, TimeSlot},
    error::Rejection,
    protocol::ConfirmationSummary,
};

use crate::{catalog::CatalogStore, clock::Clock, selection::BookingSelection, summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(rejection) => Some(rejection),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPolicy {
    /// Re-query the catalog at confirm time and refuse stale selections.
    pub revalidate_availability: bool,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            revalidate_availability: true,
        }
    }
}

pub struct StepController<S, C> {
    catalog: S,
    clock: C,
    policy: ConfirmPolicy,
    selection: BookingSelection,
}

impl<S: CatalogStore, C: Clock> StepController<S, C> {
    pub fn new(catalog: S, clock: C) -> Self {
        Self::with_policy(catalog, clock, ConfirmPolicy::default())
    }

    pub fn with_policy(catalog: S, clock: C, policy: ConfirmPolicy) -> Self {
        let selection = BookingSelection::fresh(clock.today());
        Self {
            catalog,
            clock,
            policy,
            selection,
        }
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn catalog(&self) -> &S {
        &self.catalog
    }

    pub fn policy(&self) -> ConfirmPolicy {
        self.policy
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current summary, if the selection is complete.
    pub fn summary(&self) -> Option<ConfirmationSummary> {
        summary::project(&self.selection)
    }

    pub fn select_counselor(&mut self, counselor: &Counselor) -> Transition {
        if let Err(rejection) = self.expect_step("select_counselor", Step::ChoosingCounselor) {
            return self.ignore(rejection);
        }
        if !counselor.is_selectable() {
            return self.ignore(Rejection::CounselorUnavailable(counselor.id));
        }

        self.selection.enter_choosing_time(counselor.clone());
        tracing::debug!(counselor = %counselor.id, "counselor selected");
        Transition::Applied
    }

    /// Resolves `id` through the catalog, then behaves as [`Self::select_counselor`].
    pub fn pick_counselor(&mut self, id: CounselorId) -> Transition {
        match self.catalog.find_counselor(id) {
            Some(counselor) => self.select_counselor(&counselor),
            None => self.ignore(Rejection::UnknownCounselor(id)),
        }
    }

    pub fn select_time(&mut self, slot: &TimeSlot) -> Transition {
        if let Err(rejection) = self.expect_step("select_time", Step::ChoosingTime) {
            return self.ignore(rejection);
        }
        if self.selection.counselor().is_none() {
            return self.ignore(Rejection::Incomplete);
        }
        if !slot.available {
            return self.ignore(Rejection::SlotUnavailable(slot.label.clone()));
        }

        self.selection.enter_reviewing_summary(slot.label.clone());
        tracing::debug!(time = %slot.label, "time slot selected");
        Transition::Applied
    }

    /// Resolves `label` against the slots offered on the selected date.
    pub fn pick_time(&mut self, label: &str) -> Transition {
        match self.catalog.find_time_slot(self.selection.date(), label) {
            Some(slot) => self.select_time(&slot),
            None => self.ignore(Rejection::UnknownSlot(label.to_string())),
        }
    }

    /// Allowed from any step; never moves the step.
    pub fn select_date(&mut self, date: NaiveDate) -> Transition {
        let today = self.clock.today();
        if date < today {
            return self.ignore(Rejection::PastDate { date, today });
        }

        self.selection.set_date(date);
        tracing::debug!(%date, "date selected");
        Transition::Applied
    }

    pub fn go_back(&mut self) -> Transition {
        let from = self.selection.step();
        match self.selection.retreat() {
            Some(to) => {
                tracing::debug!(from = ?from, to = ?to, "stepped back");
                Transition::Applied
            }
            None => self.ignore(Rejection::WrongStep {
                action: "go_back",
                step: from,
            }),
        }
    }

    /// Hands back the summary and starts over; `None` if confirming now is illegal.
    pub fn confirm(&mut self) -> Option<ConfirmationSummary> {
        self.try_confirm().ok()
    }

    /// Same as [`Self::confirm`], but says why nothing happened.
    pub fn try_confirm(&mut self) -> Result<ConfirmationSummary, Rejection> {
        if let Err(rejection) = self.expect_step("confirm", Step::ReviewingSummary) {
            self.ignore(rejection.clone());
            return Err(rejection);
        }
        let Some(summary) = summary::project(&self.selection) else {
            self.ignore(Rejection::Incomplete);
            return Err(Rejection::Incomplete);
        };
        let today = self.clock.today();
        if summary.date < today {
            let rejection = Rejection::PastDate {
                date: summary.date,
                today,
            };
            tracing::warn!(reason = %rejection, "refusing booking for a day that has passed");
            return Err(rejection);
        }
        if self.policy.revalidate_availability {
            if let Err(rejection) = self.revalidate(&summary) {
                tracing::warn!(reason = %rejection, "refusing stale booking");
                return Err(rejection);
            }
        }

        tracing::info!(
            counselor = %summary.counselor_id,
            date = %summary.date,
            time = %summary.time,
            "booking confirmed"
        );
        self.reset();
        Ok(summary)
    }

    /// Back to a fresh selection dated today. Always legal.
    pub fn reset(&mut self) -> Transition {
        self.selection = BookingSelection::fresh(self.clock.today());
        Transition::Applied
    }

    fn expect_step(&self, action: &'static str, expected: Step) -> Result<(), Rejection> {
        let step = self.selection.step();
        if step == expected {
            Ok(())
        } else {
            Err(Rejection::WrongStep { action, step })
        }
    }

    fn revalidate(&self, summary: &ConfirmationSummary) -> Result<(), Rejection> {
        let counselor_ok = self
            .catalog
            .find_counselor(summary.counselor_id)
            .is_some_and(|c| c.available);
        if !counselor_ok {
            return Err(Rejection::StaleSelection(format!(
                "counselor {} is no longer available",
                summary.counselor_id
            )));
        }

        let slot_ok = self
            .catalog
            .find_time_slot(summary.date, &summary.time)
            .is_some_and(|slot| slot.available);
        if !slot_ok {
            return Err(Rejection::StaleSelection(format!(
                "time slot {} is no longer available",
                summary.time
            )));
        }

        Ok(())
    }

    fn ignore(&self, rejection: Rejection) -> Transition {
        tracing::debug!(
            step = ?self.selection.step(),
            kind = ?rejection.kind(),
            reason = %rejection,
            "transition ignored"
        );
        Transition::Ignored(rejection)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
