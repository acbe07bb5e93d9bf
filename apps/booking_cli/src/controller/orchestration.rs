//! Routes UI events into the step controller and hands confirmations to the sink.

use booking_core::{
    AppointmentLedger, CatalogStore, Clock, ConfirmationSink, StepController, Transition,
};
use shared::{
    domain::{AppointmentId, Tone},
    error::{Rejection, RejectionReport},
    protocol::BookingEvent,
};

use crate::{
    context::AppContext,
    controller::events::{UiEvent, HELP},
    ui::{widgets, BookingView, Presentation},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct BookingApp<S, C> {
    controller: StepController<S, C>,
    presentation: Box<dyn Presentation>,
    context: AppContext,
    ledger: AppointmentLedger,
    sink: Box<dyn ConfirmationSink>,
    status: String,
    status_tone: Option<Tone>,
    outbox: Vec<BookingEvent>,
}

impl<S: CatalogStore, C: Clock> BookingApp<S, C> {
    pub fn new(
        controller: StepController<S, C>,
        presentation: Box<dyn Presentation>,
        context: AppContext,
        sink: Box<dyn ConfirmationSink>,
    ) -> Self {
        Self {
            controller,
            presentation,
            context,
            ledger: AppointmentLedger::new(),
            sink,
            status: String::new(),
            status_tone: None,
            outbox: Vec::new(),
        }
    }

    pub fn controller(&self) -> &StepController<S, C> {
        &self.controller
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.context
    }

    pub fn ledger(&self) -> &AppointmentLedger {
        &self.ledger
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Shows `message` as a warning on the next frame.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_tone = Some(Tone::Warning);
    }

    /// Outbound events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<BookingEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn route(&mut self, event: UiEvent) -> Flow {
        self.status.clear();
        self.status_tone = None;
        let step = self.controller.selection().step();

        if event.is_booking() && !self.presentation.accepts(&event, step) {
            tracing::debug!(
                ?event,
                ?step,
                layout = ?self.presentation.kind(),
                "control not offered here"
            );
            self.warn("That option isn't available on this step; use 'back' first.");
            return Flow::Continue;
        }

        match event {
            UiEvent::PickCounselor(id) => {
                let transition = self.controller.pick_counselor(id);
                self.after_transition(transition);
            }
            UiEvent::PickTime(label) => {
                let transition = self.controller.pick_time(&label);
                self.after_transition(transition);
            }
            UiEvent::PickDate(date) => {
                let transition = self.controller.select_date(date);
                self.after_transition(transition);
            }
            UiEvent::GoBack => {
                let transition = self.controller.go_back();
                self.after_transition(transition);
            }
            UiEvent::Reset => {
                let transition = self.controller.reset();
                self.after_transition(transition);
            }
            UiEvent::Confirm => self.confirm(),
            UiEvent::ToggleTheme => {
                self.context.toggle_theme();
                self.status = format!("Switched to the {} theme.", self.context.theme().label());
            }
            UiEvent::ToggleSidebar => {
                self.context.toggle_sidebar();
            }
            UiEvent::ShowAppointments => {
                let today = self.controller.today();
                self.status = widgets::appointment_list(&self.context, self.ledger(), today);
            }
            UiEvent::CancelAppointment(number) => {
                if let Some(id) = self.appointment_at(number) {
                    let changed = self.ledger.cancel(id);
                    self.after_ledger_update(number, changed);
                }
            }
            UiEvent::CompleteAppointment(number) => {
                if let Some(id) = self.appointment_at(number) {
                    let changed = self.ledger.complete(id);
                    self.after_ledger_update(number, changed);
                }
            }
            UiEvent::Help => {
                self.status = HELP.to_string();
            }
            UiEvent::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    pub fn render(&self) -> String {
        let view = BookingView::capture(&self.controller);
        let mut frame = vec![
            widgets::sidebar(&self.context),
            self.presentation.render(&view, &self.context),
        ];
        if !self.status.is_empty() {
            frame.push(match self.status_tone {
                Some(tone) => self.context.paint(tone, &self.status),
                None => self.status.clone(),
            });
        }
        frame.join("\n\n")
    }

    fn after_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Applied => {
                let snapshot = self.controller.selection().snapshot();
                self.outbox.push(BookingEvent::SelectionChanged { snapshot });
            }
            Transition::Ignored(rejection) => self.report(&rejection),
        }
    }

    fn confirm(&mut self) {
        let summary = match self.controller.try_confirm() {
            Ok(summary) => summary,
            Err(rejection) => {
                self.report(&rejection);
                return;
            }
        };

        self.ledger.record(&summary);
        self.outbox.push(BookingEvent::BookingConfirmed {
            summary: summary.clone(),
        });
        if let Err(err) = self.sink.deliver(&summary) {
            tracing::error!(error = %err, "confirmation sink failed");
            self.status = format!("Booked, but the confirmation could not be sent: {err}");
            self.status_tone = Some(Tone::Destructive);
            self.outbox.push(BookingEvent::SinkFailed {
                message: err.to_string(),
            });
        }
        self.outbox.push(BookingEvent::SelectionChanged {
            snapshot: self.controller.selection().snapshot(),
        });
    }

    fn appointment_at(&mut self, number: usize) -> Option<AppointmentId> {
        let id = number
            .checked_sub(1)
            .and_then(|index| self.ledger.all().get(index))
            .map(|appointment| appointment.id);
        if id.is_none() {
            self.warn(format!(
                "There is no session #{number}; type 'appointments' to list them."
            ));
        }
        id
    }

    fn after_ledger_update(&mut self, number: usize, changed: bool) {
        let Some(appointment) = self.ledger.all().get(number - 1) else {
            return;
        };
        if changed {
            self.status = format!(
                "Session #{number} with {} is now {}.",
                appointment.counselor_name,
                appointment.status.label()
            );
            self.status_tone = Some(appointment.status.tone());
        } else {
            let label = appointment.status.label();
            self.warn(format!("Session #{number} is already {label}."));
        }
    }

    fn report(&mut self, rejection: &Rejection) {
        self.warn(rejection.to_string());
        self.outbox.push(BookingEvent::TransitionIgnored {
            report: RejectionReport::from(rejection),
        });
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
