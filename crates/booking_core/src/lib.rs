//! Session-booking workflow: counselor, then time slot, then summary and
//! confirmation, with back-navigation that never leaves a stale selection.

pub mod catalog;
pub mod clock;
pub mod controller;
pub mod ledger;
pub mod selection;
pub mod sink;
pub mod summary;

pub use catalog::{CatalogError, CatalogStore, InMemoryCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{ConfirmPolicy, StepController, Transition};
pub use ledger::{Appointment, AppointmentLedger};
pub use selection::BookingSelection;
pub use sink::{ChannelSink, ConfirmationSink, FanoutSink, LogSink, SinkError};
pub use summary::project;
