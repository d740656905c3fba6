//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Empty,
    Fountain,
    Entrance,
    Pit,
    Maelstrom,
}

impl RoomKind {
    /// Kinds that must exist exactly once in every world.
    pub fn is_landmark(self) -> bool {
        matches!(self, RoomKind::Fountain | RoomKind::Entrance)
    }
}

/// One grid cell. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub kind: RoomKind,
}

impl Room {
    pub fn new(x: i32, y: i32, kind: RoomKind) -> Self {
        Room { x, y, kind }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn parse(word: &str) -> Option<Direction> {
        match word {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// Column/row offset of one step. North decreases the row.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}
