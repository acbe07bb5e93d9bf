//! Counsellor-side record of confirmed sessions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{AppointmentId, AppointmentStatus, CounselorId, SessionMedium},
    protocol::ConfirmationSummary,
};

use crate::sink::{ConfirmationSink, SinkError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub counselor_id: CounselorId,
    pub counselor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: u32,
    pub medium: SessionMedium,
    pub status: AppointmentStatus,
}

impl Appointment {
    fn scheduled_from(summary: &ConfirmationSummary) -> Self {
        Self {
            id: AppointmentId::new(),
            counselor_id: summary.counselor_id,
            counselor_name: summary.counselor_name.clone(),
            date: summary.date,
            time: summary.time.clone(),
            duration_minutes: summary.duration_minutes,
            medium: summary.medium,
            status: AppointmentStatus::Scheduled,
        }
    }
}

#[derive(Debug, Default)]
pub struct AppointmentLedger {
    appointments: Vec<Appointment>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, summary: &ConfirmationSummary) -> AppointmentId {
        let appointment = Appointment::scheduled_from(summary);
        let id = appointment.id;
        self.appointments.push(appointment);
        id
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Every appointment on `date`, whatever its status.
    pub fn on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.date == date).collect()
    }

    /// Still-scheduled appointments strictly after `date`.
    pub fn upcoming(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.date > date && a.status == AppointmentStatus::Scheduled)
            .collect()
    }

    pub fn cancel(&mut self, id: AppointmentId) -> bool {
        self.transition(id, AppointmentStatus::Cancelled)
    }

    pub fn complete(&mut self, id: AppointmentId) -> bool {
        self.transition(id, AppointmentStatus::Completed)
    }

    /// Only scheduled appointments move; finished ones stay as they are.
    fn transition(&mut self, id: AppointmentId, status: AppointmentStatus) -> bool {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) if appointment.status == AppointmentStatus::Scheduled => {
                appointment.status = status;
                tracing::debug!(appointment = ?id, status = status.label(), "appointment updated");
                true
            }
            _ => false,
        }
    }
}

impl ConfirmationSink for AppointmentLedger {
    fn deliver(&mut self, summary: &ConfirmationSummary) -> Result<(), SinkError> {
        self.record(summary);
        Ok(())
    }
}
