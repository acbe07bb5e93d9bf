use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CounselorId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counselor {
    pub id: CounselorId,
    pub name: String,
    pub specialization: String,
    /// 0.0 to 5.0, one decimal place.
    pub rating: f32,
    pub experience: String,
    pub available: bool,
}

impl Counselor {
    pub fn is_selectable(&self) -> bool {
        self.available
    }

    /// Avatar fallback: first letter of every word in the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>, available: bool) -> Self {
        Self {
            label: label.into(),
            available,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    ChoosingCounselor,
    ChoosingTime,
    ReviewingSummary,
}

impl Step {
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::ChoosingCounselor => None,
            Step::ChoosingTime => Some(Step::ChoosingCounselor),
            Step::ReviewingSummary => Some(Step::ChoosingTime),
        }
    }

    /// 1-based position, used by the wizard progress header.
    pub fn ordinal(self) -> usize {
        match self {
            Step::ChoosingCounselor => 1,
            Step::ChoosingTime => 2,
            Step::ReviewingSummary => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::ChoosingCounselor => "Choose a counselor",
            Step::ChoosingTime => "Pick a time",
            Step::ReviewingSummary => "Review & confirm",
        }
    }

    /// Whether a section belonging to `section` has been reached from `self`.
    pub fn has_reached(self, section: Step) -> bool {
        self.ordinal() >= section.ordinal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionMedium {
    #[default]
    OnlineVideo,
}

impl SessionMedium {
    pub fn label(self) -> &'static str {
        match self {
            SessionMedium::OnlineVideo => "online video",
        }
    }
}

/// Visual severity every status maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Calm,
    Success,
    Warning,
    Destructive,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AppointmentStatus::Scheduled => Tone::Calm,
            AppointmentStatus::Completed => Tone::Success,
            AppointmentStatus::Cancelled => Tone::Destructive,
        }
    }
}

pub fn availability_tone(available: bool) -> Tone {
    if available {
        Tone::Success
    } else {
        Tone::Muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let counselor = Counselor {
            id: CounselorId(1),
            name: "Dr. Sarah Johnson".into(),
            specialization: "Anxiety & Depression".into(),
            rating: 4.9,
            experience: "8 years".into(),
            available: true,
        };
        assert_eq!(counselor.initials(), "DSJ");
    }

    #[test]
    fn step_previous_walks_back_to_start() {
        assert_eq!(Step::ReviewingSummary.previous(), Some(Step::ChoosingTime));
        assert_eq!(Step::ChoosingTime.previous(), Some(Step::ChoosingCounselor));
        assert_eq!(Step::ChoosingCounselor.previous(), None);
    }

    #[test]
    fn reached_sections_include_earlier_steps() {
        assert!(Step::ReviewingSummary.has_reached(Step::ChoosingTime));
        assert!(!Step::ChoosingCounselor.has_reached(Step::ChoosingTime));
    }

    #[test]
    fn step_serializes_as_snake_case() {
        let json = serde_json::to_string(&Step::ReviewingSummary).expect("serialize");
        assert_eq!(json, "\"reviewing_summary\"");
    }
}
