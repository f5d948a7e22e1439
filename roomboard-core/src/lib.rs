//! Core types and operations for the roomboard room-booking board.
//!
//! This crate provides everything except the terminal frontend:
//! - `room` / `catalog` for the static department room catalog
//! - `booking` / `store` for the persisted booking data and its operations
//! - `validate` for booking form validation
//! - `config` for the global config file and store location

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod room;
pub mod store;
pub mod validate;

// Re-export the main types at crate root for convenience
pub use booking::{BookingDetails, BookingEntry};
pub use catalog::RoomCatalog;
pub use error::{RoomBoardError, RoomBoardResult};
pub use room::{Floor, GridPosition, Room, RoomType};
pub use store::{BookingStats, BookingStore, UpcomingBooking, group_by_date};
pub use validate::{BookingRequest, ValidationErrors};
