//! Booking types and the persisted entry variant.
//!
//! The persisted JSON predates this implementation: a room's entry for a
//! date is either a full details object or a bare boolean. `BookingEntry`
//! models that union as a tagged variant so callers never inspect raw JSON
//! shapes; "unbooked" is represented by absence from the store's maps.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full payload of a booking for one room on one date.
///
/// Field names stay camelCase on the wire for compatibility with stores
/// written by earlier versions of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: String,
    pub booked_by: String,
    pub email: String,
    pub purpose: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// What a date's inner mapping holds for a booked room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingEntry {
    /// A booking with full details.
    Details(BookingDetails),
    /// Legacy flag-only booking: "booked, no details". Only ever read from
    /// old stores, never written by this implementation.
    Flag(bool),
}

impl BookingEntry {
    /// Whether this entry counts as a booked room.
    ///
    /// A literal `false` can appear in old stores; it counts as not booked.
    pub fn is_booked(&self) -> bool {
        match self {
            BookingEntry::Details(_) => true,
            BookingEntry::Flag(booked) => *booked,
        }
    }

    pub fn details(&self) -> Option<&BookingDetails> {
        match self {
            BookingEntry::Details(details) => Some(details),
            BookingEntry::Flag(_) => None,
        }
    }
}

/// Generate a booking id, unique across the whole store.
pub fn new_booking_id() -> String {
    Uuid::new_v4().to_string()
}

/// Serde adapter for zero-padded `HH:MM` time-of-day strings.
///
/// Keeping times in this form means lexicographic order of the wire values
/// matches chronological order.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn details() -> BookingDetails {
        BookingDetails {
            id: "b1".to_string(),
            booked_by: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            purpose: "Project demo".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            participants: 5,
            notes: None,
            created_at: "2024-06-01T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_details_round_trip() {
        let json = serde_json::to_string(&BookingEntry::Details(details())).unwrap();
        assert!(json.contains("\"bookedBy\":\"Alice\""));
        assert!(json.contains("\"startTime\":\"09:00\""));
        // No notes key when notes are absent
        assert!(!json.contains("notes"));

        let back: BookingEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BookingEntry::Details(details()));
    }

    #[test]
    fn test_legacy_flag_parses() {
        let entry: BookingEntry = serde_json::from_str("true").unwrap();
        assert_eq!(entry, BookingEntry::Flag(true));
        assert!(entry.is_booked());
        assert!(entry.details().is_none());

        let entry: BookingEntry = serde_json::from_str("false").unwrap();
        assert!(!entry.is_booked());
    }

    #[test]
    fn test_booking_ids_distinct() {
        assert_ne!(new_booking_id(), new_booking_id());
    }
}
