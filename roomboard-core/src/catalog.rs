//! The department room catalog.
//!
//! A fixed, compiled-in list of rooms. Operations that need room metadata
//! (capacity checks, floor filtering, notice-board rendering) take the
//! catalog as a read-only collaborator.

use crate::room::{Floor, GridPosition, Room, RoomType};

#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    /// The standard department catalog: twelve rooms across two floors.
    pub fn department() -> Self {
        let rooms = vec![
            // Ground floor
            room(
                "lab101",
                "Lab 101",
                RoomType::Lab,
                30,
                &["Computers", "Projector", "Whiteboard", "Air Conditioning"],
                Floor::Ground,
                grid(1, 1, 2, 2),
            ),
            room(
                "lab102",
                "Lab 102",
                RoomType::Lab,
                25,
                &["Computers", "Network Equipment", "Projector"],
                Floor::Ground,
                grid(1, 4, 2, 2),
            ),
            room(
                "room103",
                "Room 103",
                RoomType::Classroom,
                40,
                &["Projector", "Whiteboard", "Audio System"],
                Floor::Ground,
                grid(4, 1, 3, 2),
            ),
            room(
                "meeting104",
                "Meeting 104",
                RoomType::Meeting,
                12,
                &["Projector", "Conference Table", "Video Conferencing"],
                Floor::Ground,
                grid(4, 5, 1, 1),
            ),
            room(
                "office105",
                "Office 105",
                RoomType::Office,
                4,
                &["Computers", "Printer"],
                Floor::Ground,
                grid(6, 1, 1, 1),
            ),
            room(
                "office106",
                "Office 106",
                RoomType::Office,
                4,
                &["Computers", "Scanner"],
                Floor::Ground,
                grid(6, 3, 1, 1),
            ),
            // First floor
            room(
                "lab201",
                "Lab 201",
                RoomType::Lab,
                35,
                &["High-end Computers", "Graphics Cards", "Projector", "3D Printers"],
                Floor::First,
                grid(1, 1, 2, 2),
            ),
            room(
                "lab202",
                "Lab 202",
                RoomType::Lab,
                28,
                &["Embedded Systems", "Microcontrollers", "Oscilloscopes"],
                Floor::First,
                grid(1, 4, 2, 2),
            ),
            room(
                "room203",
                "Room 203",
                RoomType::Classroom,
                50,
                &["Smart Board", "Projector", "Sound System", "Recording Equipment"],
                Floor::First,
                grid(4, 1, 3, 2),
            ),
            room(
                "meeting204",
                "Meeting 204",
                RoomType::Meeting,
                8,
                &["Video Wall", "Conference Table", "Wireless Display"],
                Floor::First,
                grid(4, 5, 1, 1),
            ),
            room(
                "office205",
                "Faculty 205",
                RoomType::Office,
                6,
                &["Workstations", "Research Equipment", "Library"],
                Floor::First,
                grid(6, 1, 2, 1),
            ),
            room(
                "office206",
                "Office 206",
                RoomType::Office,
                3,
                &["Computers", "Printer", "Server Access"],
                Floor::First,
                grid(6, 4, 1, 1),
            ),
        ];

        RoomCatalog { rooms }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn on_floor(&self, floor: Floor) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor == floor).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::department()
    }
}

fn room(
    id: &str,
    name: &str,
    room_type: RoomType,
    capacity: u32,
    equipment: &[&str],
    floor: Floor,
    grid_position: GridPosition,
) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        room_type,
        capacity,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        floor,
        grid_position,
    }
}

fn grid(row: u32, col: u32, width: u32, height: u32) -> GridPosition {
    GridPosition { row, col, width, height }
}
