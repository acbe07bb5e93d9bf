//! App-wide UI state passed explicitly to views.

use crossbeam_channel::{unbounded, Receiver, Sender};
use shared::domain::Tone;

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextChange {
    Theme(Theme),
    Sidebar { collapsed: bool },
}

pub struct AppContext {
    theme: Theme,
    color: bool,
    sidebar_collapsed: bool,
    streak_days: u32,
    subscribers: Vec<Sender<ContextChange>>,
}

impl AppContext {
    pub fn new(theme: Theme, color: bool, streak_days: u32) -> Self {
        Self {
            theme,
            color,
            sidebar_collapsed: false,
            streak_days,
            subscribers: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        self.theme.paint(tone, text, self.color)
    }

    pub fn subscribe(&mut self) -> Receiver<ContextChange> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.notify(ContextChange::Theme(theme));
        }
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.notify(ContextChange::Sidebar {
            collapsed: self.sidebar_collapsed,
        });
    }

    fn notify(&mut self, change: ContextChange) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(change).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned closed context subscribers");
        }
    }
}

pub fn streak_message(days: u32) -> &'static str {
    if days < 3 {
        "Great start! Every step forward is a victory."
    } else if days < 7 {
        "You're building a healthy habit. Keep the momentum going!"
    } else if days < 30 {
        "Amazing consistency! You're making mental wellness a priority."
    } else {
        "Incredible dedication! You are an inspiration."
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
