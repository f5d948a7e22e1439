//! The booking store: date -> room -> entry, with persistence.
//!
//! The store is the single source of truth for all bookings. Mutations go
//! through the methods here and the caller persists the result with `save`
//! afterwards (write-through, no batching). On the wire the store is one
//! JSON object: `{ "YYYY-MM-DD": { "roomId": details-or-flag } }`.
//!
//! Invariant: a room id appears under a date only while it is booked, and a
//! date key exists only while its inner mapping is non-empty. Delete paths
//! prune empty mappings so "does this date have an entry" stays a valid
//! existence check.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::{BookingDetails, BookingEntry};
use crate::catalog::RoomCatalog;
use crate::error::{RoomBoardError, RoomBoardResult};
use crate::room::{Floor, Room};

/// One date's bookings, keyed by room id.
pub type RoomEntries = BTreeMap<String, BookingEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingStore(BTreeMap<NaiveDate, RoomEntries>);

/// Room availability counts for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub booked: usize,
    pub available: usize,
}

impl std::ops::Add for BookingStats {
    type Output = BookingStats;

    /// Sum stats across floors for department-wide totals.
    fn add(self, other: BookingStats) -> BookingStats {
        BookingStats {
            total: self.total + other.total,
            booked: self.booked + other.booked,
            available: self.available + other.available,
        }
    }
}

/// One row of the notice board: a detail-bearing booking joined with its room.
#[derive(Debug, Clone)]
pub struct UpcomingBooking<'a> {
    pub date: NaiveDate,
    pub room_id: &'a str,
    pub booking: &'a BookingDetails,
    pub room: &'a Room,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load the store from disk.
    ///
    /// A missing file or unparseable JSON falls back to an empty store;
    /// corruption never surfaces to the caller.
    pub fn load(path: &Path) -> BookingStore {
        let Ok(content) = std::fs::read_to_string(path) else {
            return BookingStore::default();
        };

        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Persist the full store as one JSON blob.
    ///
    /// Writes through a temp file and renames into place so a crash mid-write
    /// leaves the previous blob intact.
    pub fn save(&self, path: &Path) -> RoomBoardResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RoomBoardError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, path)?;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All bookings for a date. Empty mapping when the date has none.
    pub fn bookings_for_date(&self, date: NaiveDate) -> &RoomEntries {
        static EMPTY: RoomEntries = BTreeMap::new();
        self.0.get(&date).unwrap_or(&EMPTY)
    }

    pub fn booking_for(&self, date: NaiveDate, room_id: &str) -> Option<&BookingEntry> {
        self.0.get(&date)?.get(room_id)
    }

    /// The existing booking details for a room on a date, if any.
    /// Flag-only entries have no details to return.
    pub fn booking_details(&self, date: NaiveDate, room_id: &str) -> Option<&BookingDetails> {
        self.booking_for(date, room_id)?.details()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dates that currently have at least one booking, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    // =========================================================================
    // Mutations (caller must `save` afterwards)
    // =========================================================================

    /// Set the booking for a room on a date, overwriting any prior booking.
    /// One booking per room per day; there is no slot model.
    pub fn upsert_booking(&mut self, date: NaiveDate, room_id: &str, details: BookingDetails) {
        self.0
            .entry(date)
            .or_default()
            .insert(room_id.to_string(), BookingEntry::Details(details));
    }

    /// Remove the booking for a room on a date. Idempotent.
    pub fn delete_booking(&mut self, date: NaiveDate, room_id: &str) {
        if let Some(entries) = self.0.get_mut(&date) {
            entries.remove(room_id);
            if entries.is_empty() {
                self.0.remove(&date);
            }
        }
    }

    /// Remove every booking on a date.
    pub fn reset_date(&mut self, date: NaiveDate) {
        self.0.remove(&date);
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Availability counts for a date over the given rooms.
    ///
    /// Pass the full catalog for department-wide stats or one floor's rooms
    /// for per-floor stats; `booked + available == total` always holds.
    pub fn stats<'a>(
        &self,
        date: NaiveDate,
        rooms: impl IntoIterator<Item = &'a Room>,
    ) -> BookingStats {
        let entries = self.bookings_for_date(date);

        let mut total = 0;
        let mut booked = 0;
        for room in rooms {
            total += 1;
            if entries.get(&room.id).is_some_and(|e| e.is_booked()) {
                booked += 1;
            }
        }

        BookingStats { total, booked, available: total - booked }
    }

    /// Upcoming detail-bearing bookings from `today` onwards, ascending by
    /// (date, start time), optionally restricted to one floor.
    ///
    /// Flag-only entries carry nothing to display and are skipped, as are
    /// entries whose room id is missing from the catalog. The iterator
    /// borrows the store and is recomputed fresh on every call.
    pub fn upcoming<'a>(
        &'a self,
        catalog: &'a RoomCatalog,
        today: NaiveDate,
        floor: Option<Floor>,
    ) -> impl Iterator<Item = UpcomingBooking<'a>> + 'a {
        self.0.range(today..).flat_map(move |(date, entries)| {
            let mut day: Vec<UpcomingBooking<'a>> = entries
                .iter()
                .filter_map(|(room_id, entry)| {
                    let booking = entry.details()?;
                    if booking.id.is_empty() {
                        return None;
                    }
                    let room = catalog.room(room_id)?;
                    if floor.is_some_and(|f| room.floor != f) {
                        return None;
                    }
                    Some(UpcomingBooking { date: *date, room_id: room_id.as_str(), booking, room })
                })
                .collect();

            // Inner maps are keyed by room id, so order within a day by time
            day.sort_by(|a, b| a.booking.start_time.cmp(&b.booking.start_time));
            day
        })
    }
}

/// Group upcoming bookings by date, preserving the per-day ordering of the
/// input. Used for collapsible date sections on the notice board.
pub fn group_by_date<'a>(
    bookings: impl IntoIterator<Item = UpcomingBooking<'a>>,
) -> BTreeMap<NaiveDate, Vec<UpcomingBooking<'a>>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<UpcomingBooking<'a>>> = BTreeMap::new();
    for booking in bookings {
        grouped.entry(booking.date).or_default().push(booking);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn details(id: &str, start: &str, end: &str, participants: u32) -> BookingDetails {
        BookingDetails {
            id: id.to_string(),
            booked_by: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            purpose: "Project demo".to_string(),
            start_time: time(start),
            end_time: time(end),
            participants,
            notes: None,
            created_at: "2024-06-01T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_empty_store_stats() {
        let store = BookingStore::new();
        let catalog = RoomCatalog::department();

        let stats = store.stats(date("2024-06-10"), catalog.rooms());
        assert_eq!(stats.total, catalog.len());
        assert_eq!(stats.booked, 0);
        assert_eq!(stats.available, catalog.len());
    }

    #[test]
    fn test_upsert_then_query() {
        let mut store = BookingStore::new();
        let booking = details("b1", "09:00", "10:00", 5);

        store.upsert_booking(date("2024-06-10"), "lab101", booking.clone());

        let entries = store.bookings_for_date(date("2024-06-10"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("lab101"), Some(&BookingEntry::Details(booking)));

        // Other dates stay empty
        assert!(store.bookings_for_date(date("2024-06-11")).is_empty());
    }

    #[test]
    fn test_upsert_overwrites_same_room_same_day() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "lab101", details("b2", "13:00", "14:00", 8));

        let entries = store.bookings_for_date(date("2024-06-10"));
        assert_eq!(entries.len(), 1);
        assert_eq!(store.booking_details(date("2024-06-10"), "lab101").unwrap().id, "b2");
    }

    #[test]
    fn test_delete_prunes_empty_date() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.delete_booking(date("2024-06-10"), "lab101");

        // The date entry itself is gone, not just the room entry
        assert!(store.is_empty());
        assert_eq!(store.dates().count(), 0);
    }

    #[test]
    fn test_delete_keeps_date_with_other_bookings() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "lab102", details("b2", "11:00", "12:00", 3));

        store.delete_booking(date("2024-06-10"), "lab101");

        let entries = store.bookings_for_date(date("2024-06-10"));
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("lab102"));
    }

    #[test]
    fn test_delete_idempotent() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));

        store.delete_booking(date("2024-06-10"), "lab101");
        let once = store.clone();
        store.delete_booking(date("2024-06-10"), "lab101");

        assert_eq!(store, once);

        // Deleting from a date that never existed is also a no-op
        store.delete_booking(date("2030-01-01"), "lab101");
        assert_eq!(store, once);
    }

    #[test]
    fn test_reset_date() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "lab102", details("b2", "11:00", "12:00", 3));
        store.upsert_booking(date("2024-06-11"), "lab101", details("b3", "09:00", "10:00", 5));

        store.reset_date(date("2024-06-10"));

        assert!(store.bookings_for_date(date("2024-06-10")).is_empty());
        assert_eq!(store.bookings_for_date(date("2024-06-11")).len(), 1);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");

        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-07-02"), "meeting104", details("b2", "14:00", "15:30", 8));

        store.save(&path).unwrap();
        let loaded = BookingStore::load(&path);

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_missing_or_corrupt_falls_back_empty() {
        let dir = tempfile::tempdir().unwrap();

        let missing = BookingStore::load(&dir.path().join("nope.json"));
        assert!(missing.is_empty());

        let corrupt_path = dir.path().join("bookings.json");
        std::fs::write(&corrupt_path, "{not json").unwrap();
        let corrupt = BookingStore::load(&corrupt_path);
        assert!(corrupt.is_empty());
    }

    #[test]
    fn test_load_legacy_flag_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        std::fs::write(&path, r#"{"2024-06-10":{"lab101":true}}"#).unwrap();

        let store = BookingStore::load(&path);
        let entry = store.booking_for(date("2024-06-10"), "lab101").unwrap();
        assert!(entry.is_booked());
        assert!(entry.details().is_none());
    }

    #[test]
    fn test_stats_counts_flags_and_details() {
        let catalog = RoomCatalog::department();
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));

        // Simulate a legacy flag entry via the wire format
        let json = r#"{"2024-06-10":{"lab101":true,"lab102":{"id":"b2","bookedBy":"Bob","email":"bob@example.com","purpose":"Seminar","startTime":"11:00","endTime":"12:00","participants":10,"createdAt":"2024-06-01T08:00:00Z"}}}"#;
        let legacy: BookingStore = serde_json::from_str(json).unwrap();

        let stats = legacy.stats(date("2024-06-10"), catalog.rooms());
        assert_eq!(stats.booked, 2);
        assert_eq!(stats.available + stats.booked, stats.total);

        let ground = legacy.stats(date("2024-06-10"), catalog.on_floor(Floor::Ground));
        let first = legacy.stats(date("2024-06-10"), catalog.on_floor(Floor::First));
        assert_eq!(ground + first, stats);
    }

    #[test]
    fn test_upcoming_ordered_by_date_then_time() {
        let catalog = RoomCatalog::department();
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-12"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "room103", details("b2", "14:00", "15:00", 20));
        store.upsert_booking(date("2024-06-10"), "lab102", details("b3", "08:00", "09:00", 6));

        let upcoming: Vec<_> = store.upcoming(&catalog, date("2024-06-01"), None).collect();
        let keys: Vec<_> = upcoming.iter().map(|u| (u.date, u.booking.start_time)).collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(upcoming[0].room_id, "lab102");
        assert_eq!(upcoming[2].date, date("2024-06-12"));
    }

    #[test]
    fn test_upcoming_excludes_past_dates() {
        let catalog = RoomCatalog::department();
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-09"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "lab101", details("b2", "09:00", "10:00", 5));

        // Today is inclusive, date-only comparison
        let upcoming: Vec<_> = store.upcoming(&catalog, date("2024-06-10"), None).collect();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].booking.id, "b2");
    }

    #[test]
    fn test_upcoming_excludes_flag_entries() {
        let json = r#"{"2024-06-10":{"lab101":true,"lab102":{"id":"b2","bookedBy":"Bob","email":"bob@example.com","purpose":"Seminar","startTime":"11:00","endTime":"12:00","participants":10,"createdAt":"2024-06-01T08:00:00Z"}}}"#;
        let store: BookingStore = serde_json::from_str(json).unwrap();
        let catalog = RoomCatalog::department();

        let upcoming: Vec<_> = store.upcoming(&catalog, date("2024-06-01"), None).collect();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].room_id, "lab102");
    }

    #[test]
    fn test_upcoming_skips_unknown_rooms() {
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "demolished999", details("b1", "09:00", "10:00", 5));

        let catalog = RoomCatalog::department();
        assert_eq!(store.upcoming(&catalog, date("2024-06-01"), None).count(), 0);
    }

    #[test]
    fn test_upcoming_floor_filter() {
        let catalog = RoomCatalog::department();
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "lab101", details("b1", "09:00", "10:00", 5));
        store.upsert_booking(date("2024-06-10"), "lab201", details("b2", "09:00", "10:00", 5));

        let ground: Vec<_> = store.upcoming(&catalog, date("2024-06-01"), Some(Floor::Ground)).collect();
        assert_eq!(ground.len(), 1);
        assert_eq!(ground[0].room_id, "lab101");
    }

    #[test]
    fn test_group_by_date_preserves_order() {
        let catalog = RoomCatalog::department();
        let mut store = BookingStore::new();
        store.upsert_booking(date("2024-06-10"), "room103", details("b1", "14:00", "15:00", 20));
        store.upsert_booking(date("2024-06-10"), "lab102", details("b2", "08:00", "09:00", 6));
        store.upsert_booking(date("2024-06-11"), "lab101", details("b3", "09:00", "10:00", 5));

        let grouped = group_by_date(store.upcoming(&catalog, date("2024-06-01"), None));

        assert_eq!(grouped.len(), 2);
        let first_day = &grouped[&date("2024-06-10")];
        assert_eq!(first_day.len(), 2);
        assert_eq!(first_day[0].room_id, "lab102");
        assert_eq!(first_day[1].room_id, "room103");
    }
}
