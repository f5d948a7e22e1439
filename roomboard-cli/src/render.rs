//! Terminal rendering for roomboard types.
//!
//! Extension trait adding colored output to core types with owo_colors, so
//! commands can print consistently without formatting logic of their own.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use roomboard_core::booking::BookingEntry;
use roomboard_core::room::Room;
use roomboard_core::store::{BookingStats, UpcomingBooking};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Room {
    fn render(&self) -> String {
        format!(
            "{} {}",
            self.name.bold(),
            format!("({}, seats {})", self.room_type, self.capacity).dimmed()
        )
    }
}

impl Render for BookingEntry {
    fn render(&self) -> String {
        match self.details() {
            Some(booking) => {
                let window = format!(
                    "{}-{}",
                    booking.start_time.format("%H:%M"),
                    booking.end_time.format("%H:%M")
                );
                format!(
                    "{} {} {}",
                    "booked".red(),
                    window,
                    format!("{} ({})", booking.purpose, booking.booked_by).dimmed()
                )
            }
            None => format!("{} {}", "booked".red(), "(no details)".dimmed()),
        }
    }
}

impl Render for BookingStats {
    fn render(&self) -> String {
        format!(
            "{} available, {} booked of {} rooms",
            self.available.to_string().green(),
            self.booked.to_string().red(),
            self.total
        )
    }
}

impl Render for UpcomingBooking<'_> {
    fn render(&self) -> String {
        let window = format!(
            "{}-{}",
            self.booking.start_time.format("%H:%M"),
            self.booking.end_time.format("%H:%M")
        );
        let who = format!(
            "{}, {} {}",
            self.booking.booked_by,
            self.booking.participants,
            pluralize("attendee", self.booking.participants as usize)
        );
        format!(
            "{} {} {} {}",
            window,
            self.room.name.bold(),
            self.booking.purpose,
            format!("({})", who).dimmed()
        )
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Jun 12")
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 { word.to_string() } else { format!("{}s", word) }
}
