//! Controller layer: UI events and their routing into the booking workflow.

pub mod events;
pub mod orchestration;
