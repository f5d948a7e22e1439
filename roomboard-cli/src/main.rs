mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use roomboard_core::config::RoomBoardConfig;
use roomboard_core::room::Floor;
use roomboard_core::store::BookingStore;
use roomboard_core::validate::BookingRequest;
use roomboard_core::RoomCatalog;

#[derive(Parser)]
#[command(name = "roomboard")]
#[command(about = "Book department rooms and browse the public notice board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month calendar with booked-room counts per day
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show the floor plan and availability for a date
    Floor {
        /// Date to inspect (YYYY-MM-DD)
        date: String,

        /// Only show this floor (ground or first)
        #[arg(short, long)]
        floor: Option<String>,
    },
    /// Book a room for a date, or edit its existing booking
    Book {
        /// Date to book (YYYY-MM-DD)
        date: String,

        /// Room id (e.g. lab101)
        room: String,

        /// Who the booking is for
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Purpose of the booking
        #[arg(long)]
        purpose: String,

        /// Start time (HH:MM)
        #[arg(long)]
        start: String,

        /// End time (HH:MM)
        #[arg(long)]
        end: String,

        /// Number of participants
        #[arg(long)]
        participants: u32,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel the booking for a room on a date
    Cancel {
        /// Date of the booking (YYYY-MM-DD)
        date: String,

        /// Room id (e.g. lab101)
        room: String,
    },
    /// Clear every booking on a date
    Reset {
        /// Date to clear (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the public notice board: availability today and upcoming bookings
    Board {
        /// Only show this floor (ground or first)
        #[arg(short, long)]
        floor: Option<String>,
    },
    /// Check the admin credentials
    Login {
        /// Username (prompted for if omitted)
        #[arg(short, long)]
        username: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = RoomCatalog::department();

    match cli.command {
        Commands::Calendar { month } => {
            let (store, _) = load_store()?;
            commands::calendar::run(&store, month.as_deref())
        }
        Commands::Floor { date, floor } => {
            let date = parse_date(&date)?;
            let floor = parse_floor_filter(floor.as_deref())?;
            let (store, _) = load_store()?;
            commands::floor::run(&catalog, &store, date, floor)
        }
        Commands::Book { date, room, name, email, purpose, start, end, participants, notes } => {
            let date = parse_date(&date)?;
            let request = BookingRequest {
                booked_by: name,
                email,
                purpose,
                start_time: parse_time(&start)?,
                end_time: parse_time(&end)?,
                participants,
                notes,
            };
            let (mut store, store_path) = load_store()?;
            commands::book::run(&catalog, &mut store, &store_path, date, &room, request)
        }
        Commands::Cancel { date, room } => {
            let date = parse_date(&date)?;
            let (mut store, store_path) = load_store()?;
            commands::cancel::run(&catalog, &mut store, &store_path, date, &room)
        }
        Commands::Reset { date, yes } => {
            let date = parse_date(&date)?;
            let (mut store, store_path) = load_store()?;
            commands::reset::run(&mut store, &store_path, date, yes)
        }
        Commands::Board { floor } => {
            let floor = parse_floor_filter(floor.as_deref())?;
            let (store, _) = load_store()?;
            commands::board::run(&catalog, &store, floor)
        }
        // Login touches neither config nor store
        Commands::Login { username } => commands::login::run(username.as_deref()),
    }
}

/// Resolve the store location from config and load the store.
/// Only called by commands that actually read or write bookings.
fn load_store() -> Result<(BookingStore, PathBuf)> {
    let config = RoomBoardConfig::load()?;
    let store_path = config.store_path();
    let store = BookingStore::load(&store_path);
    Ok((store, store_path))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time '{}'. Expected HH:MM", s))
}

fn parse_floor_filter(s: Option<&str>) -> Result<Option<Floor>> {
    s.map(|s| s.parse::<Floor>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()
}
