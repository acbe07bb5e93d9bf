//! Read-only registries of counselors and time slots.

use std::{collections::HashSet, fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;
use shared::domain::{Counselor, CounselorId, TimeSlot};
use thiserror::Error;

pub trait CatalogStore {
    /// Counselors in insertion order; stable across calls.
    fn list_counselors(&self) -> Vec<Counselor>;

    /// Slots offered on `date`. The template is the same for every date.
    fn list_time_slots(&self, date: NaiveDate) -> Vec<TimeSlot>;

    fn find_counselor(&self, id: CounselorId) -> Option<Counselor> {
        self.list_counselors().into_iter().find(|c| c.id == id)
    }

    fn find_time_slot(&self, date: NaiveDate, label: &str) -> Option<TimeSlot> {
        self.list_time_slots(date)
            .into_iter()
            .find(|slot| slot.label == label)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn list_counselors(&self) -> Vec<Counselor> {
        (**self).list_counselors()
    }

    fn list_time_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        (**self).list_time_slots(date)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("counselor {id} has rating {rating}; expected 0.0-5.0 with one decimal")]
    InvalidRating { id: CounselorId, rating: f32 },
    #[error("counselor id {0} appears more than once")]
    DuplicateCounselor(CounselorId),
    #[error("time slot '{0}' appears more than once")]
    DuplicateSlot(String),
    #[error("catalog must list at least one {0}")]
    Empty(&'static str),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    counselors: Vec<Counselor>,
    #[serde(default)]
    time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    counselors: Vec<Counselor>,
    time_slots: Vec<TimeSlot>,
}

impl InMemoryCatalog {
    pub fn new(
        counselors: Vec<Counselor>,
        time_slots: Vec<TimeSlot>,
    ) -> Result<Self, CatalogError> {
        validate(&counselors, &time_slots)?;
        Ok(Self {
            counselors,
            time_slots,
        })
    }

    /// The counselors and daily slot template shipped with the app.
    pub fn seed() -> Self {
        let counselor =
            |id, name: &str, specialization: &str, rating, experience: &str, available| Counselor {
                id: CounselorId(id),
                name: name.to_string(),
                specialization: specialization.to_string(),
                rating,
                experience: experience.to_string(),
                available,
            };

        Self {
            counselors: vec![
                counselor(1, "Dr. Sarah Johnson", "Anxiety & Depression", 4.9, "8 years", true),
                counselor(2, "Dr. Michael Chen", "Academic Stress", 4.8, "6 years", true),
                counselor(3, "Dr. Emily Rodriguez", "Relationship Issues", 4.9, "10 years", false),
            ],
            time_slots: vec![
                TimeSlot::new("09:00 AM", true),
                TimeSlot::new("10:30 AM", false),
                TimeSlot::new("12:00 PM", true),
                TimeSlot::new("02:00 PM", true),
                TimeSlot::new("03:30 PM", false),
                TimeSlot::new("05:00 PM", true),
            ],
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.counselors, file.time_slots)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            counselors = catalog.counselors.len(),
            time_slots = catalog.time_slots.len(),
            "loaded booking catalog"
        );
        Ok(catalog)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_counselors(&self) -> Vec<Counselor> {
        self.counselors.clone()
    }

    fn list_time_slots(&self, _date: NaiveDate) -> Vec<TimeSlot> {
        self.time_slots.clone()
    }
}

fn validate(counselors: &[Counselor], time_slots: &[TimeSlot]) -> Result<(), CatalogError> {
    if counselors.is_empty() {
        return Err(CatalogError::Empty("counselor"));
    }
    if time_slots.is_empty() {
        return Err(CatalogError::Empty("time slot"));
    }

    let mut ids = HashSet::new();
    for counselor in counselors {
        if !is_valid_rating(counselor.rating) {
            return Err(CatalogError::InvalidRating {
                id: counselor.id,
                rating: counselor.rating,
            });
        }
        if !ids.insert(counselor.id) {
            return Err(CatalogError::DuplicateCounselor(counselor.id));
        }
    }

    let mut labels = HashSet::new();
    for slot in time_slots {
        if !labels.insert(slot.label.as_str()) {
            return Err(CatalogError::DuplicateSlot(slot.label.clone()));
        }
    }

    Ok(())
}

fn is_valid_rating(rating: f32) -> bool {
    if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
        return false;
    }
    let tenths = rating * 10.0;
    (tenths.round() - tenths).abs() < 1e-3
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
