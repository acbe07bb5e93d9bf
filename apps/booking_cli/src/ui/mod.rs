//! UI layer for the booking terminal: layouts, widgets, and themes.

pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::{BookingView, LayoutKind, Presentation};
pub use theme::Theme;
