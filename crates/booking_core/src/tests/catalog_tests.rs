use super::*;

use std::io::Write;

fn any_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("date")
}

const TWO_COUNSELORS: &str = r#"
[[counselors]]
id = 7
name = "Dr. Ada Park"
specialization = "Sleep"
rating = 4.5
experience = "3 years"
available = true

[[counselors]]
id = 8
name = "Dr. Ben Ortiz"
specialization = "Grief"
rating = 3.0
experience = "12 years"
available = false

[[time_slots]]
label = "08:00 AM"
available = true

[[time_slots]]
label = "08:30 AM"
available = false
"#;

#[test]
fn seed_lists_counselors_in_insertion_order() {
    let catalog = InMemoryCatalog::seed();
    let ids: Vec<i64> = catalog.list_counselors().iter().map(|c| c.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalog.list_counselors(), catalog.list_counselors());
}

#[test]
fn slot_template_ignores_the_date() {
    let catalog = InMemoryCatalog::seed();
    let later = any_date() + chrono::Days::new(30);
    assert_eq!(catalog.list_time_slots(any_date()), catalog.list_time_slots(later));
    assert_eq!(catalog.list_time_slots(any_date()).len(), 6);
}

#[test]
fn finds_counselors_and_slots_by_key() {
    let catalog = InMemoryCatalog::seed();
    let emily = catalog.find_counselor(CounselorId(3)).expect("counselor 3");
    assert!(!emily.available);
    assert!(catalog.find_counselor(CounselorId(99)).is_none());

    let slot = catalog
        .find_time_slot(any_date(), "10:30 AM")
        .expect("slot");
    assert!(!slot.available);
    assert!(catalog.find_time_slot(any_date(), "11:00 PM").is_none());
}

#[test]
fn parses_catalog_from_toml() {
    let catalog = InMemoryCatalog::from_toml_str(TWO_COUNSELORS).expect("catalog");
    let counselors = catalog.list_counselors();
    assert_eq!(counselors.len(), 2);
    assert_eq!(counselors[0].name, "Dr. Ada Park");
    assert!(!counselors[1].available);
    assert_eq!(catalog.list_time_slots(any_date())[1].label, "08:30 AM");
}

#[test]
fn loads_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(TWO_COUNSELORS.as_bytes()).expect("write catalog");

    let catalog = InMemoryCatalog::load(file.path()).expect("load");
    assert_eq!(catalog.list_counselors()[0].id, CounselorId(7));
}

#[test]
fn missing_file_reports_path() {
    let err = InMemoryCatalog::load("/definitely/not/here.toml").expect_err("should fail");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn rejects_rating_out_of_range() {
    let raw = TWO_COUNSELORS.replace("rating = 4.5", "rating = 5.5");
    let err = InMemoryCatalog::from_toml_str(&raw).expect_err("should fail");
    assert!(matches!(err, CatalogError::InvalidRating { id: CounselorId(7), .. }));
}

#[test]
fn rejects_rating_with_two_decimals() {
    let raw = TWO_COUNSELORS.replace("rating = 4.5", "rating = 4.55");
    let err = InMemoryCatalog::from_toml_str(&raw).expect_err("should fail");
    assert!(matches!(err, CatalogError::InvalidRating { .. }));
}

#[test]
fn rejects_duplicate_counselor_ids() {
    let raw = TWO_COUNSELORS.replace("id = 8", "id = 7");
    let err = InMemoryCatalog::from_toml_str(&raw).expect_err("should fail");
    assert!(matches!(err, CatalogError::DuplicateCounselor(CounselorId(7))));
}

#[test]
fn rejects_duplicate_slot_labels() {
    let raw = TWO_COUNSELORS.replace("08:30 AM", "08:00 AM");
    let err = InMemoryCatalog::from_toml_str(&raw).expect_err("should fail");
    assert!(matches!(err, CatalogError::DuplicateSlot(label) if label == "08:00 AM"));
}

#[test]
fn rejects_catalog_without_slots() {
    let raw = r#"
[[counselors]]
id = 1
name = "Solo"
specialization = "General"
rating = 4.0
experience = "1 year"
available = true
"#;
    let err = InMemoryCatalog::from_toml_str(raw).expect_err("should fail");
    assert!(matches!(err, CatalogError::Empty("time slot")));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = InMemoryCatalog::from_toml_str("counselors = 3").expect_err("should fail");
    assert!(matches!(err, CatalogError::Parse(_)));
}
