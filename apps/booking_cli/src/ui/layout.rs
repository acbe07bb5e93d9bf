//! The two booking screens: a wizard gating one section at a time, and a
//! single page revealing sections as the selection progresses.

use booking_core::{CatalogStore, Clock, StepController};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use shared::{
    domain::{Counselor, Step, TimeSlot},
    protocol::{BookingSnapshot, ConfirmationSummary},
};

use crate::{context::AppContext, controller::events::UiEvent, ui::widgets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    Wizard,
    SinglePage,
}

impl LayoutKind {
    pub fn build(self) -> Box<dyn Presentation> {
        match self {
            LayoutKind::Wizard => Box::new(WizardLayout),
            LayoutKind::SinglePage => Box::new(SinglePageLayout),
        }
    }
}

/// Everything a layout needs, re-queried from the controller per frame.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub today: NaiveDate,
    pub snapshot: BookingSnapshot,
    pub counselors: Vec<Counselor>,
    pub slots: Vec<TimeSlot>,
    pub summary: Option<ConfirmationSummary>,
}

impl BookingView {
    pub fn capture<S: CatalogStore, C: Clock>(controller: &StepController<S, C>) -> Self {
        let selection = controller.selection();
        Self {
            today: controller.today(),
            snapshot: selection.snapshot(),
            counselors: controller.catalog().list_counselors(),
            slots: controller.catalog().list_time_slots(selection.date()),
            summary: controller.summary(),
        }
    }
}

pub trait Presentation {
    fn kind(&self) -> LayoutKind;

    /// Whether this screen offers the control that would raise `event` at `step`.
    fn accepts(&self, event: &UiEvent, step: Step) -> bool;

    fn render(&self, view: &BookingView, ctx: &AppContext) -> String;
}

pub struct WizardLayout;

impl Presentation for WizardLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Wizard
    }

    fn accepts(&self, event: &UiEvent, step: Step) -> bool {
        match event {
            // The calendar lives on the first page only; the date is fixed from then on.
            UiEvent::PickDate(_) => step == Step::ChoosingCounselor,
            _ => true,
        }
    }

    fn render(&self, view: &BookingView, ctx: &AppContext) -> String {
        let step = view.snapshot.step;
        let mut sections = vec![format!(
            "Book a Session  |  Step {} of 3: {}",
            step.ordinal(),
            step.label()
        )];

        match step {
            Step::ChoosingCounselor => {
                sections.push(widgets::calendar_card(ctx, view.snapshot.date, view.today));
                sections.push(widgets::counselor_list(ctx, &view.counselors, None));
            }
            Step::ChoosingTime => {
                sections.push(widgets::slot_grid(ctx, view.snapshot.date, &view.slots, None));
                sections.push("  'back' to choose another counselor".to_string());
            }
            Step::ReviewingSummary => {
                if let Some(summary) = &view.summary {
                    sections.push(widgets::summary_card(ctx, summary));
                }
                sections.push("  'back' to choose another time".to_string());
            }
        }

        sections.join("\n\n")
    }
}

pub struct SinglePageLayout;

impl Presentation for SinglePageLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::SinglePage
    }

    fn accepts(&self, _event: &UiEvent, _step: Step) -> bool {
        true
    }

    fn render(&self, view: &BookingView, ctx: &AppContext) -> String {
        let step = view.snapshot.step;
        let mut sections = vec![
            "Book a Session".to_string(),
            widgets::calendar_card(ctx, view.snapshot.date, view.today),
            widgets::counselor_list(ctx, &view.counselors, view.snapshot.counselor.as_ref()),
        ];

        if step.has_reached(Step::ChoosingTime) {
            sections.push(widgets::slot_grid(
                ctx,
                view.snapshot.date,
                &view.slots,
                view.snapshot.time.as_deref(),
            ));
        }
        if let Some(summary) = &view.summary {
            sections.push(widgets::summary_card(ctx, summary));
        }

        sections.join("\n\n")
    }
}

#[cfg(test)]
#[path = "../tests/layout_tests.rs"]
mod tests;
