//! Month calendar view with per-day booked-room counts.

use anyhow::Result;
use chrono::{Datelike, Local, Months, NaiveDate};
use owo_colors::OwoColorize;
use roomboard_core::store::BookingStore;

/// Cell width: 2 for the day number, 4 for the "(n)" booked count.
const CELL_WIDTH: usize = 6;

pub fn run(store: &BookingStore, month: Option<&str>) -> Result<()> {
    let first = match month {
        Some(s) => parse_month(s)?,
        None => Local::now().date_naive().with_day(1).unwrap(),
    };

    println!("{}", first.format("%B %Y").to_string().bold());

    let header: Vec<String> = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
        .collect();
    println!("{}", header.join(" ").dimmed());

    for week in month_grid(first) {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                None => " ".repeat(CELL_WIDTH),
                Some(date) => {
                    let booked = booked_count(store, *date);
                    let cell = day_cell(*date, booked);
                    if booked > 0 {
                        cell.yellow().to_string()
                    } else {
                        cell
                    }
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    let booked_days = days_with_bookings(store, first);
    if booked_days > 0 {
        println!();
        println!(
            "{}",
            format!("{} day(s) with bookings, booked-room count in parentheses", booked_days)
                .dimmed()
        );
    }

    Ok(())
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}

/// How many rooms are booked on a date.
fn booked_count(store: &BookingStore, date: NaiveDate) -> usize {
    store
        .bookings_for_date(date)
        .values()
        .filter(|e| e.is_booked())
        .count()
}

/// Fixed-width day cell: the day number, plus its booked count when non-zero
/// (e.g. " 5    " or " 5(2) ").
fn day_cell(date: NaiveDate, booked: usize) -> String {
    if booked > 0 {
        format!("{:>2}{:<4}", date.day(), format!("({})", booked))
    } else {
        format!("{:>2}    ", date.day())
    }
}

fn days_with_bookings(store: &BookingStore, first: NaiveDate) -> usize {
    let next = first + Months::new(1);
    store
        .dates()
        .filter(|d| *d >= first && *d < next)
        .filter(|d| booked_count(store, *d) > 0)
        .count()
}

/// Lay the month out in Sunday-first weeks; `None` pads the edges.
fn month_grid(first: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let next_month = first + Months::new(1);
    let days = (next_month - first).num_days() as u32;

    let mut weeks = Vec::new();
    let mut week = [None; 7];

    for day in 1..=days {
        let date = first.with_day(day).unwrap();
        let slot = date.weekday().num_days_from_sunday() as usize;
        week[slot] = Some(date);
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(|d| d.is_some()) {
        weeks.push(week);
    }

    weeks
}
