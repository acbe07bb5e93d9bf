//! Text widgets shared by both booking layouts.

use booking_core::{
    summary::{format_long_date, format_short_date},
    Appointment, AppointmentLedger,
};
use chrono::NaiveDate;
use shared::{
    domain::{availability_tone, Counselor, Tone, TimeSlot},
    protocol::ConfirmationSummary,
};

use crate::context::{streak_message, AppContext};

const NAV_ITEMS: [&str; 5] = [
    "Dashboard",
    "Chat Support",
    "Book Session",
    "Forum",
    "Resources",
];

pub fn section_title(ctx: &AppContext, title: &str) -> String {
    format!("== {} ==", ctx.paint(Tone::Calm, title))
}

pub fn sidebar(ctx: &AppContext) -> String {
    if ctx.sidebar_collapsed() {
        return format!("[=] {} day streak", ctx.streak_days());
    }
    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            if *item == "Book Session" {
                ctx.paint(Tone::Calm, &format!("> {item}"))
            } else {
                format!("  {item}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{nav}\n  Streak: {} days. {}",
        ctx.streak_days(),
        streak_message(ctx.streak_days())
    )
}

pub fn calendar_card(ctx: &AppContext, selected: NaiveDate, today: NaiveDate) -> String {
    let mut out = section_title(ctx, "Select Date");
    out.push_str(&format!("\n  Selected: {}", format_long_date(selected)));
    if selected == today {
        out.push_str(&format!(" {}", ctx.paint(Tone::Muted, "(today)")));
    }
    out.push_str(&format!(
        "\n  {}",
        ctx.paint(Tone::Muted, "Dates before today cannot be booked.")
    ));
    out
}

pub fn counselor_card(ctx: &AppContext, counselor: &Counselor, selected: bool) -> String {
    let marker = if selected { "(*)" } else { "( )" };
    let mut header = format!(
        "{marker} [{}] {} {}",
        counselor.id,
        counselor.initials(),
        counselor.name
    );
    if !counselor.available {
        header = ctx.paint(availability_tone(false), &format!("{header}  Unavailable"));
    } else if selected {
        header = ctx.paint(Tone::Calm, &header);
    }
    format!(
        "{header}\n      {}\n      * {:.1}  |  {} experience  |  Online Session",
        counselor.specialization, counselor.rating, counselor.experience
    )
}

pub fn counselor_list(
    ctx: &AppContext,
    counselors: &[Counselor],
    selected: Option<&Counselor>,
) -> String {
    let mut out = section_title(ctx, "Available Counselors");
    out.push_str("\n  Choose a counselor that specializes in your area of concern");
    for counselor in counselors {
        let is_selected = selected.is_some_and(|s| s.id == counselor.id);
        out.push('\n');
        out.push_str(&counselor_card(ctx, counselor, is_selected));
    }
    out
}

pub fn slot_grid(
    ctx: &AppContext,
    date: NaiveDate,
    slots: &[TimeSlot],
    selected: Option<&str>,
) -> String {
    let mut out = section_title(ctx, "Available Times");
    out.push_str(&format!("\n  {}\n ", format_long_date(date)));
    for (index, slot) in slots.iter().enumerate() {
        let cell = if selected == Some(slot.label.as_str()) {
            ctx.paint(Tone::Calm, &format!("[{}]", slot.label))
        } else {
            ctx.paint(availability_tone(slot.available), &format!(" {} ", slot.label))
        };
        out.push(' ');
        out.push_str(&cell);
        if index % 3 == 2 && index + 1 < slots.len() {
            out.push_str("\n ");
        }
    }
    out
}

pub fn summary_card(ctx: &AppContext, summary: &ConfirmationSummary) -> String {
    let mut out = section_title(ctx, "Booking Summary");
    let rows = [
        ("Counselor", summary.counselor_name.clone()),
        ("Date", summary.formatted_date.clone()),
        ("Time", summary.time.clone()),
        ("Duration", format!("{} minutes", summary.duration_minutes)),
        ("Session Type", summary.medium.label().to_string()),
    ];
    for (label, value) in rows {
        out.push_str(&format!("\n  {:<14}{value}", format!("{label}:")));
    }
    out.push_str(&format!(
        "\n  {}",
        ctx.paint(Tone::Success, "Type 'confirm' to book this session.")
    ));
    out
}

pub fn confirmation_dialog(ctx: &AppContext, summary: &ConfirmationSummary) -> String {
    format!(
        "{}\n  Your session with {} on {} at {} has been successfully booked.\n  \
         Next Steps:\n  \
         - You'll receive a confirmation email shortly\n  \
         - A calendar invite with video link will be sent\n  \
         - You can reschedule up to 24 hours before",
        ctx.paint(Tone::Success, "Booking Confirmed!"),
        summary.counselor_name,
        format_short_date(summary.date),
        summary.time
    )
}

/// Sessions grouped into today, upcoming and history. Numbers are
/// positions in the ledger, as taken by `cancel <n>` and `complete <n>`.
pub fn appointment_list(ctx: &AppContext, ledger: &AppointmentLedger, today: NaiveDate) -> String {
    let mut out = section_title(ctx, "Your Sessions");
    if ledger.all().is_empty() {
        out.push_str("\n  No sessions booked yet.");
        return out;
    }

    let todays = ledger.on(today);
    let upcoming = ledger.upcoming(today);
    let history: Vec<&Appointment> = ledger
        .all()
        .iter()
        .filter(|a| a.date != today && !upcoming.iter().any(|u| u.id == a.id))
        .collect();

    for (heading, group) in [("Today", todays), ("Upcoming", upcoming), ("History", history)] {
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("\n  {}", ctx.paint(Tone::Muted, heading)));
        for appointment in group {
            let number = ledger
                .all()
                .iter()
                .position(|a| a.id == appointment.id)
                .map_or(0, |index| index + 1);
            out.push_str(&format!(
                "\n  #{number} {} {}  {}  {} min  {}",
                format_short_date(appointment.date),
                appointment.time,
                appointment.counselor_name,
                appointment.duration_minutes,
                ctx.paint(appointment.status.tone(), appointment.status.label())
            ));
        }
    }
    out
}
