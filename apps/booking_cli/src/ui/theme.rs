//! Terminal palette: every [`Tone`] has a style under every theme.

use clap::ValueEnum;
use serde::Deserialize;
use shared::domain::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// ANSI SGR parameters for `tone`.
    pub fn sgr(self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Theme::Light, Tone::Calm) => "34",
            (Theme::Light, Tone::Success) => "32",
            (Theme::Light, Tone::Warning) => "33",
            (Theme::Light, Tone::Destructive) => "31",
            (Theme::Light, Tone::Muted) => "2",
            (Theme::Dark, Tone::Calm) => "94",
            (Theme::Dark, Tone::Success) => "92",
            (Theme::Dark, Tone::Warning) => "93",
            (Theme::Dark, Tone::Destructive) => "91",
            (Theme::Dark, Tone::Muted) => "90",
        }
    }

    pub fn paint(self, tone: Tone, text: &str, color: bool) -> String {
        if color {
            format!("\x1b[{}m{text}\x1b[0m", self.sgr(tone))
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        assert_eq!(Theme::Dark.paint(Tone::Warning, "pending", false), "pending");
    }

    #[test]
    fn themes_style_the_same_tone_differently() {
        assert_ne!(Theme::Light.sgr(Tone::Calm), Theme::Dark.sgr(Tone::Calm));
        let painted = Theme::Light.paint(Tone::Destructive, "cancelled", true);
        assert!(painted.starts_with("\x1b[31m"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
