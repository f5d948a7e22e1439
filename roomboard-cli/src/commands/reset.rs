//! Clear every booking on a date.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use roomboard_core::store::BookingStore;

pub fn run(store: &mut BookingStore, store_path: &Path, date: NaiveDate, yes: bool) -> Result<()> {
    let count = store.bookings_for_date(date).len();

    if count == 0 {
        println!("{}", format!("Nothing booked on {}", date.format("%Y-%m-%d")).dimmed());
        return Ok(());
    }

    if !yes {
        let prompt = format!(
            "Clear {} booking(s) on {}?",
            count,
            date.format("%Y-%m-%d")
        );
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    store.reset_date(date);
    store.save(store_path)?;

    println!(
        "{} {} booking(s) on {}",
        "Cleared".green(),
        count,
        date.format("%Y-%m-%d")
    );

    Ok(())
}
