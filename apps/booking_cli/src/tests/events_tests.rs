use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("date")
}

#[test]
fn parses_counselor_ids() {
    assert_eq!(
        parse_command("counselor 2", today()),
        Ok(UiEvent::PickCounselor(CounselorId(2)))
    );
    assert_eq!(
        parse_command("c x", today()),
        Err(CommandParseError::BadCounselorId("x".into()))
    );
}

#[test]
fn normalizes_time_labels() {
    assert_eq!(
        parse_command("time 9:00am", today()),
        Ok(UiEvent::PickTime("09:00 AM".into()))
    );
    assert_eq!(
        parse_command("time 02:00 pm", today()),
        Ok(UiEvent::PickTime("02:00 PM".into()))
    );
}

#[test]
fn parses_dates_and_shortcuts() {
    assert_eq!(
        parse_command("date 2026-12-01", today()),
        Ok(UiEvent::PickDate(
            NaiveDate::from_ymd_opt(2026, 12, 1).expect("date")
        ))
    );
    assert_eq!(
        parse_command("date tomorrow", today()),
        Ok(UiEvent::PickDate(
            NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
        ))
    );
    assert!(matches!(
        parse_command("date 12/01/2026", today()),
        Err(CommandParseError::BadDate(_))
    ));
}

#[test]
fn missing_argument_names_the_command() {
    let err = parse_command("time", today()).expect_err("missing label");
    assert_eq!(err.to_string(), "'time' needs a slot label");
}

#[test]
fn unknown_and_empty_commands_fail() {
    assert_eq!(parse_command("   ", today()), Err(CommandParseError::Empty));
    assert_eq!(
        parse_command("dance", today()),
        Err(CommandParseError::Unknown("dance".into()))
    );
}

#[test]
fn shell_commands_are_not_booking_events() {
    assert!(parse_command("back", today()).expect("back").is_booking());
    assert!(!parse_command("theme", today()).expect("theme").is_booking());
    assert_eq!(parse_command("QUIT", today()), Ok(UiEvent::Quit));
}

#[test]
fn parses_session_numbers_for_cancel_and_complete() {
    assert_eq!(
        parse_command("cancel 2", today()),
        Ok(UiEvent::CancelAppointment(2))
    );
    assert_eq!(
        parse_command("complete #1", today()),
        Ok(UiEvent::CompleteAppointment(1))
    );
    assert_eq!(
        parse_command("cancel 0", today()),
        Err(CommandParseError::BadSessionNumber("0".into()))
    );
    assert!(matches!(
        parse_command("cancel", today()),
        Err(CommandParseError::MissingArgument { .. })
    ));
    assert!(!UiEvent::CancelAppointment(1).is_booking());
}
