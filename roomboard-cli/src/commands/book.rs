//! Book a room, or edit its existing booking.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use roomboard_core::store::BookingStore;
use roomboard_core::validate::BookingRequest;
use roomboard_core::RoomCatalog;

pub fn run(
    catalog: &RoomCatalog,
    store: &mut BookingStore,
    store_path: &Path,
    date: NaiveDate,
    room_id: &str,
    request: BookingRequest,
) -> Result<()> {
    let Some(room) = catalog.room(room_id) else {
        let available: Vec<_> = catalog.rooms().iter().map(|r| r.id.as_str()).collect();
        anyhow::bail!("Unknown room '{}'. Available rooms: {}", room_id, available.join(", "));
    };

    if let Err(errors) = request.validate(room) {
        for (field, message) in errors.iter() {
            println!("  {} {}", format!("{}:", field).red(), message);
        }
        anyhow::bail!("Booking not saved");
    }

    let existing = store.booking_details(date, &room.id).cloned();
    let editing = existing.is_some();
    let details = request.into_details(existing.as_ref());

    let window = format!(
        "{}-{}",
        details.start_time.format("%H:%M"),
        details.end_time.format("%H:%M")
    );

    store.upsert_booking(date, &room.id, details);
    store.save(store_path)?;

    let verb = if editing { "Updated booking for" } else { "Booked" };
    println!(
        "{} {} on {} ({})",
        verb.green(),
        room.name.bold(),
        date.format("%Y-%m-%d"),
        window
    );

    Ok(())
}
