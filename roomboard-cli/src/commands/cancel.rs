//! Cancel the booking for a room on a date.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use roomboard_core::store::BookingStore;
use roomboard_core::RoomCatalog;

pub fn run(
    catalog: &RoomCatalog,
    store: &mut BookingStore,
    store_path: &Path,
    date: NaiveDate,
    room_id: &str,
) -> Result<()> {
    let name = catalog.room(room_id).map(|r| r.name.as_str()).unwrap_or(room_id);

    // Nothing booked is a no-op, not an error
    if store.booking_for(date, room_id).is_none() {
        println!(
            "{}",
            format!("No booking for {} on {}", name, date.format("%Y-%m-%d")).dimmed()
        );
        return Ok(());
    }

    store.delete_booking(date, room_id);
    store.save(store_path)?;

    println!(
        "{} {} on {}",
        "Cancelled".green(),
        name.bold(),
        date.format("%Y-%m-%d")
    );

    Ok(())
}
