//! Text commands typed at the prompt, parsed into UI events.

use chrono::{Days, NaiveDate};
use shared::domain::CounselorId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    PickCounselor(CounselorId),
    PickTime(String),
    PickDate(NaiveDate),
    GoBack,
    Confirm,
    Reset,
    ToggleTheme,
    ToggleSidebar,
    ShowAppointments,
    /// 1-based position in the appointment list.
    CancelAppointment(usize),
    CompleteAppointment(usize),
    Help,
    Quit,
}

impl UiEvent {
    /// Events that drive the booking state machine rather than the shell.
    pub fn is_booking(&self) -> bool {
        matches!(
            self,
            UiEvent::PickCounselor(_)
                | UiEvent::PickTime(_)
                | UiEvent::PickDate(_)
                | UiEvent::GoBack
                | UiEvent::Confirm
                | UiEvent::Reset
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a counselor id")]
    BadCounselorId(String),
    #[error("'{0}' is not a date; use YYYY-MM-DD, 'today' or 'tomorrow'")]
    BadDate(String),
    #[error("'{0}' is not a session number")]
    BadSessionNumber(String),
}

pub const HELP: &str = "\
counselor <id>       choose a counselor
time <label>         choose a time slot, e.g. 'time 09:00 AM'
date <YYYY-MM-DD>    choose a date ('today' and 'tomorrow' work too)
back                 return to the previous step
confirm              confirm the booking
reset                start over
appointments         list booked sessions
cancel <n>           cancel session n from the list
complete <n>         mark session n as completed
theme                switch light/dark
sidebar              collapse/expand the sidebar
quit                 leave";

pub fn parse_command(line: &str, today: NaiveDate) -> Result<UiEvent, CommandParseError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Err(CommandParseError::Empty),
        "counselor" | "c" => {
            let raw = required(rest, "counselor", "a counselor id")?;
            raw.parse::<i64>()
                .map(|id| UiEvent::PickCounselor(CounselorId(id)))
                .map_err(|_| CommandParseError::BadCounselorId(raw.to_string()))
        }
        "time" | "t" => {
            let raw = required(rest, "time", "a slot label")?;
            Ok(UiEvent::PickTime(normalize_slot_label(raw)))
        }
        "date" | "d" => {
            let raw = required(rest, "date", "a date")?;
            parse_date(raw, today).map(UiEvent::PickDate)
        }
        "back" | "b" => Ok(UiEvent::GoBack),
        "confirm" => Ok(UiEvent::Confirm),
        "reset" => Ok(UiEvent::Reset),
        "theme" => Ok(UiEvent::ToggleTheme),
        "sidebar" => Ok(UiEvent::ToggleSidebar),
        "appointments" | "a" => Ok(UiEvent::ShowAppointments),
        "cancel" => {
            let raw = required(rest, "cancel", "a session number")?;
            parse_session_number(raw).map(UiEvent::CancelAppointment)
        }
        "complete" => {
            let raw = required(rest, "complete", "a session number")?;
            parse_session_number(raw).map(UiEvent::CompleteAppointment)
        }
        "help" | "?" => Ok(UiEvent::Help),
        "quit" | "exit" | "q" => Ok(UiEvent::Quit),
        other => Err(CommandParseError::Unknown(other.to_string())),
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandParseError> {
    if rest.is_empty() {
        Err(CommandParseError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, CommandParseError> {
    match raw.to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| CommandParseError::BadDate(raw.to_string())),
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| CommandParseError::BadDate(raw.to_string())),
    }
}

fn parse_session_number(raw: &str) -> Result<usize, CommandParseError> {
    match raw.trim_start_matches('#').parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(CommandParseError::BadSessionNumber(raw.to_string())),
    }
}

/// `9:00am` and `09:00 am` both become `09:00 AM`.
fn normalize_slot_label(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let (clock, meridiem) = match compact.strip_suffix("AM") {
        Some(clock) => (clock, Some("AM")),
        None => match compact.strip_suffix("PM") {
            Some(clock) => (clock, Some("PM")),
            None => (compact.as_str(), None),
        },
    };

    let clock = match clock.split_once(':') {
        Some((hours, minutes)) if hours.len() == 1 => format!("0{hours}:{minutes}"),
        _ => clock.to_string(),
    };

    match meridiem {
        Some(meridiem) => format!("{clock} {meridiem}"),
        None => clock,
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
