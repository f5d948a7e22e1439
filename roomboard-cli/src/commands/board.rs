//! The public notice board: today's availability and upcoming bookings
//! grouped by date. Read-only.

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use roomboard_core::room::Floor;
use roomboard_core::store::BookingStore;
use roomboard_core::{group_by_date, RoomCatalog};

use crate::render::{date_label, pluralize, Render};

pub fn run(catalog: &RoomCatalog, store: &BookingStore, floor: Option<Floor>) -> Result<()> {
    let today = Local::now().date_naive();

    println!("{}", "Department Notice Board".bold());
    println!("{}", today.format("%A, %B %-d, %Y").to_string().dimmed());
    println!();

    // Today's availability, per floor and department-wide
    let ground = store.stats(today, catalog.on_floor(Floor::Ground));
    let first = store.stats(today, catalog.on_floor(Floor::First));
    println!("Ground Floor: {}", ground.render());
    println!("First Floor:  {}", first.render());
    println!("Department:   {}", (ground + first).render());
    println!();

    let grouped = group_by_date(store.upcoming(catalog, today, floor));

    if grouped.is_empty() {
        println!("{}", "No upcoming bookings".dimmed());
        return Ok(());
    }

    let total: usize = grouped.values().map(|day| day.len()).sum();
    println!(
        "{}",
        format!("{} upcoming {}", total, pluralize("booking", total)).bold()
    );

    for (date, bookings) in &grouped {
        println!();
        println!("{}", date_label(*date, today).bold());
        for booking in bookings {
            println!("  {}", booking.render());
        }
    }

    Ok(())
}
