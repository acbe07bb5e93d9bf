use booking_core::{
    project, CatalogStore, FixedClock, InMemoryCatalog, StepController, Transition,
};
use chrono::{Days, NaiveDate};
use shared::domain::{CounselorId, SessionMedium, Step};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("date")
}

fn controller() -> StepController<InMemoryCatalog, FixedClock> {
    StepController::new(InMemoryCatalog::seed(), FixedClock(today()))
}

/// Scenario A: fresh, then an available counselor.
fn scenario_a() -> StepController<InMemoryCatalog, FixedClock> {
    let mut ctl = controller();
    let x = ctl
        .catalog()
        .find_counselor(CounselorId(1))
        .expect("counselor X");
    assert!(x.available);
    assert_eq!(ctl.select_counselor(&x), Transition::Applied);
    ctl
}

/// Scenario C: from A, an available slot.
fn scenario_c() -> StepController<InMemoryCatalog, FixedClock> {
    let mut ctl = scenario_a();
    let z = ctl
        .catalog()
        .find_time_slot(today(), "12:00 PM")
        .expect("slot Z");
    assert!(z.available);
    assert_eq!(ctl.select_time(&z), Transition::Applied);
    ctl
}

#[test]
fn unavailable_counselors_never_change_the_selection() {
    let catalog = InMemoryCatalog::seed();
    for counselor in catalog.list_counselors().iter().filter(|c| !c.available) {
        let mut ctl = controller();
        let before = ctl.selection().clone();
        assert!(!ctl.select_counselor(counselor).is_applied());
        assert_eq!(ctl.selection(), &before);
    }
}

#[test]
fn unavailable_slots_never_change_the_selection() {
    let catalog = InMemoryCatalog::seed();
    for slot in catalog
        .list_time_slots(today())
        .iter()
        .filter(|s| !s.available)
    {
        let mut ctl = scenario_a();
        let before = ctl.selection().clone();
        assert!(!ctl.select_time(slot).is_applied());
        assert_eq!(ctl.selection(), &before);
    }
}

#[test]
fn past_dates_never_change_the_date() {
    let mut ctl = controller();
    for back in 1..=400 {
        let past = today() - Days::new(back);
        assert!(!ctl.select_date(past).is_applied());
        assert_eq!(ctl.selection().date(), today());
    }
}

#[test]
fn confirm_is_a_noop_outside_review() {
    let mut fresh = controller();
    assert!(fresh.confirm().is_none());
    assert!(fresh.selection().is_fresh());

    let mut choosing_time = scenario_a();
    let before = choosing_time.selection().clone();
    assert!(choosing_time.confirm().is_none());
    assert_eq!(choosing_time.selection(), &before);
}

#[test]
fn reset_is_idempotent() {
    let mut once = scenario_c();
    once.reset();
    let mut twice = scenario_c();
    twice.reset();
    twice.reset();
    assert_eq!(once.selection(), twice.selection());
}

#[test]
fn projection_is_pure() {
    let ctl = scenario_c();
    let before = ctl.selection().clone();
    let first = project(ctl.selection());
    let second = project(ctl.selection());
    assert_eq!(first, second);
    assert_eq!(ctl.selection(), &before);
}

#[test]
fn scenario_a_moves_to_choosing_time() {
    let ctl = scenario_a();
    assert_eq!(ctl.selection().step(), Step::ChoosingTime);
    assert_eq!(ctl.selection().counselor().map(|c| c.id), Some(CounselorId(1)));
}

#[test]
fn scenario_b_unavailable_slot_changes_nothing() {
    let mut ctl = scenario_a();
    let y = ctl
        .catalog()
        .find_time_slot(today(), "03:30 PM")
        .expect("slot Y");
    assert!(!y.available);
    assert!(!ctl.select_time(&y).is_applied());
    assert_eq!(ctl.selection().step(), Step::ChoosingTime);
    assert!(ctl.selection().time().is_none());
}

#[test]
fn scenario_c_moves_to_review() {
    let ctl = scenario_c();
    assert_eq!(ctl.selection().step(), Step::ReviewingSummary);
    assert_eq!(ctl.selection().time(), Some("12:00 PM"));
    assert!(ctl.selection().is_consistent());
}

#[test]
fn scenario_d_confirm_returns_summary_and_starts_over() {
    let mut ctl = scenario_c();
    let summary = ctl.confirm().expect("summary");
    assert_eq!(summary.counselor_id, CounselorId(1));
    assert_eq!(summary.counselor_name, "Dr. Sarah Johnson");
    assert_eq!(summary.time, "12:00 PM");
    assert_eq!(summary.duration_minutes, 50);
    assert_eq!(summary.medium, SessionMedium::OnlineVideo);
    assert_eq!(summary.medium.label(), "online video");

    assert_eq!(ctl.selection().step(), Step::ChoosingCounselor);
    assert!(ctl.selection().counselor().is_none());
    assert!(ctl.selection().time().is_none());
}

#[test]
fn scenario_e_back_twice_unwinds_everything() {
    let mut ctl = scenario_c();
    assert!(ctl.go_back().is_applied());
    assert_eq!(ctl.selection().step(), Step::ChoosingTime);
    assert!(ctl.selection().time().is_none());
    assert_eq!(ctl.selection().counselor().map(|c| c.id), Some(CounselorId(1)));

    assert!(ctl.go_back().is_applied());
    assert_eq!(ctl.selection().step(), Step::ChoosingCounselor);
    assert!(ctl.selection().counselor().is_none());
    assert!(ctl.selection().time().is_none());
}

#[test]
fn confirmed_date_is_the_one_picked() {
    let mut ctl = controller();
    let later = today() + Days::new(2);
    ctl.select_date(later);
    ctl.pick_counselor(CounselorId(2));
    ctl.pick_time("05:00 PM");
    let summary = ctl.confirm().expect("summary");
    assert_eq!(summary.date, later);
    assert_eq!(summary.formatted_date, "10/20/2026");
    assert_eq!(ctl.selection().date(), today());
}
