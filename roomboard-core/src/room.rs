//! Room reference types.
//!
//! Rooms are static catalog data: defined once at startup and never mutated.
//! Bookings reference them by id only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A bookable room in the department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: u32,
    pub equipment: Vec<String>,
    pub floor: Floor,
    pub grid_position: GridPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Lab,
    Classroom,
    Office,
    Meeting,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomType::Lab => "lab",
            RoomType::Classroom => "classroom",
            RoomType::Office => "office",
            RoomType::Meeting => "meeting",
        };
        write!(f, "{}", label)
    }
}

/// Which floor a room is on. Used for filtering and layout grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    Ground,
    First,
}

impl Floor {
    pub fn label(&self) -> &'static str {
        match self {
            Floor::Ground => "Ground Floor",
            Floor::First => "First Floor",
        }
    }
}

impl FromStr for Floor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ground" => Ok(Floor::Ground),
            "first" => Ok(Floor::First),
            _ => Err(format!("Unknown floor '{}'. Expected 'ground' or 'first'", s)),
        }
    }
}

/// Position of a room on the floor plan grid. Layout only, no behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
}
