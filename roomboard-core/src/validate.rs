//! Booking form validation.
//!
//! A `BookingRequest` is the raw form payload. It must pass `validate`
//! against the target room before it becomes a `BookingDetails`; nothing is
//! written to the store on a validation failure.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveTime, Utc};

use crate::booking::{BookingDetails, new_booking_id};
use crate::room::Room;

/// The fields a user fills in when booking a room.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub booked_by: String,
    pub email: String,
    pub purpose: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: u32,
    pub notes: Option<String>,
}

/// Validation messages keyed by form field, for inline display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|m| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

impl BookingRequest {
    /// Check the request against the room it is for.
    ///
    /// Returns every failing field at once so a form can show all messages
    /// inline, using the field keys the board has always used.
    pub fn validate(&self, room: &Room) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.booked_by.trim().is_empty() {
            errors.insert("booked_by", "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email is required");
        } else if !looks_like_email(email) {
            errors.insert("email", "Please enter a valid email");
        }

        if self.purpose.trim().is_empty() {
            errors.insert("purpose", "Purpose is required");
        }

        if self.start_time >= self.end_time {
            errors.insert("time", "End time must be after start time");
        }

        if self.participants < 1 || self.participants > room.capacity {
            errors.insert(
                "participants",
                format!("Participants must be between 1 and {}", room.capacity),
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Turn a validated request into storable details.
    ///
    /// When editing, `id` and `created_at` carry over from the existing
    /// booking; a new booking gets a fresh id and the current timestamp.
    pub fn into_details(self, existing: Option<&BookingDetails>) -> BookingDetails {
        BookingDetails {
            id: existing.map(|b| b.id.clone()).unwrap_or_else(new_booking_id),
            created_at: existing.map(|b| b.created_at).unwrap_or_else(Utc::now),
            booked_by: self.booked_by.trim().to_string(),
            email: self.email.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
            start_time: self.start_time,
            end_time: self.end_time,
            participants: self.participants,
            notes: self.notes,
        }
    }
}

/// Minimal `local@domain.tld` shape check. Intentionally loose; this board
/// never sends mail.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
