//! Vocabulary shared by the booking core and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
