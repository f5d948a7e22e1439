//! Floor plan view: per-room status and availability stats for one date.

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use roomboard_core::room::Floor;
use roomboard_core::store::BookingStore;
use roomboard_core::RoomCatalog;

use crate::render::Render;

pub fn run(
    catalog: &RoomCatalog,
    store: &BookingStore,
    date: NaiveDate,
    floor: Option<Floor>,
) -> Result<()> {
    let floors: Vec<Floor> = match floor {
        Some(f) => vec![f],
        None => vec![Floor::Ground, Floor::First],
    };

    println!("{}", date.format("%A, %B %-d, %Y").to_string().bold());

    for (i, f) in floors.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_floor(catalog, store, date, *f);
    }

    // Department-wide line only when showing the whole building
    if floor.is_none() {
        let stats = store.stats(date, catalog.rooms());
        println!();
        println!("Department: {}", stats.render());
    }

    Ok(())
}

fn print_floor(catalog: &RoomCatalog, store: &BookingStore, date: NaiveDate, floor: Floor) {
    let rooms = catalog.on_floor(floor);
    let stats = store.stats(date, rooms.clone());

    println!();
    println!("{} ({})", floor.label().bold(), stats.render());

    for room in rooms {
        let status = match store.booking_for(date, &room.id) {
            Some(entry) if entry.is_booked() => entry.render(),
            _ => "available".green().to_string(),
        };

        println!("  {:<12} {}  {}", room.id, room.render(), status);
        println!("               {}", room.equipment.join(", ").dimmed());
    }
}
