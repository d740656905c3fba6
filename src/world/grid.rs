use std::collections::HashSet;
use std::io;

use log::{debug, info};
use rand::Rng;

use super::model::{Room, RoomKind};

/// Where the player and the entrance always start.
pub const ENTRANCE: (i32, i32) = (0, 0);

/// Redraws allowed per placement before falling back to a linear scan.
const MAX_DRAWS_PER_ROOM: usize = 256;

/// Source of random cells used while placing special rooms.
///
/// Every `rand::Rng` is a picker; tests supply scripted ones.
pub trait RoomPicker {
    /// Returns a `(x, y)` cell with both coordinates in `0..size`.
    fn pick(&mut self, size: usize) -> (usize, usize);
}

impl<R: Rng + ?Sized> RoomPicker for R {
    fn pick(&mut self, size: usize) -> (usize, usize) {
        (self.gen_range(0..size), self.gen_range(0..size))
    }
}

/// Square grid of rooms, stored row-major: `rows[y][x]`.
#[derive(Debug, Clone)]
pub struct World {
    size: usize,
    rows: Vec<Vec<Room>>,
}

impl World {
    /// Build a `size`×`size` world with the entrance at (0, 0) and one
    /// fountain, `pits` pits and `maelstroms` maelstroms on distinct cells.
    pub fn build(
        size: usize,
        pits: usize,
        maelstroms: usize,
        picker: &mut impl RoomPicker,
    ) -> io::Result<World> {
        let specials = pits + maelstroms + 1;
        if size == 0 || specials >= size * size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "a {size}x{size} world cannot hold {specials} special rooms besides the entrance"
                ),
            ));
        }

        let mut cells: Vec<Vec<Option<RoomKind>>> = vec![vec![None; size]; size];
        cells[0][0] = Some(RoomKind::Entrance);

        place_at_random(&mut cells, RoomKind::Fountain, picker);
        for _ in 0..pits {
            place_at_random(&mut cells, RoomKind::Pit, picker);
        }
        for _ in 0..maelstroms {
            place_at_random(&mut cells, RoomKind::Maelstrom, picker);
        }

        let rows = cells
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, kind)| {
                        Room::new(x as i32, y as i32, kind.unwrap_or(RoomKind::Empty))
                    })
                    .collect()
            })
            .collect();

        info!("built {size}x{size} world with {pits} pit(s) and {maelstroms} maelstrom(s)");
        Ok(World { size, rows })
    }

    /// Build a world from a fixed picture, one string per row.
    ///
    /// `.` empty, `E` entrance, `F` fountain, `P` pit, `M` maelstrom.
    pub fn from_layout(layout: &[&str]) -> io::Result<World> {
        let size = layout.len();
        let mut rows = Vec::with_capacity(size);

        for (y, line) in layout.iter().enumerate() {
            let mut row = Vec::with_capacity(size);
            for (x, c) in line.chars().enumerate() {
                let kind = match c {
                    '.' => RoomKind::Empty,
                    'E' => RoomKind::Entrance,
                    'F' => RoomKind::Fountain,
                    'P' => RoomKind::Pit,
                    'M' => RoomKind::Maelstrom,
                    other => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("unknown room symbol '{other}' at row {y}, col {x}"),
                        ));
                    }
                };
                row.push(Room::new(x as i32, y as i32, kind));
            }
            if row.len() != size {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("row {y} has {} rooms, expected {size}", row.len()),
                ));
            }
            rows.push(row);
        }

        if size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "layout has no rows",
            ));
        }

        Ok(World { size, rows })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rows.iter().flatten()
    }

    pub fn count(&self, kind: RoomKind) -> usize {
        self.rooms().filter(|r| r.kind == kind).count()
    }

    /// The room at `(x, y)`, or `None` outside the grid.
    pub fn room_at(&self, x: i32, y: i32) -> Option<Room> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    /// The room nearest `(x, y)`; each coordinate is clamped into `0..size`.
    pub fn room_with_clamp(&self, x: i32, y: i32) -> Room {
        let max = self.size as i32 - 1;
        let col = x.clamp(0, max) as usize;
        let row = y.clamp(0, max) as usize;
        self.rows[row][col]
    }

    /// Distinct non-empty kinds among the eight neighbours of `(x, y)`.
    pub fn adjacent_dangers(&self, x: i32, y: i32) -> HashSet<RoomKind> {
        const NEIGHBOURS: [(i32, i32); 8] = [
            (0, -1),  // north
            (1, -1),  // north-east
            (1, 0),   // east
            (1, 1),   // south-east
            (0, 1),   // south
            (-1, 1),  // south-west
            (-1, 0),  // west
            (-1, -1), // north-west
        ];

        NEIGHBOURS
            .iter()
            .filter_map(|(dx, dy)| self.room_at(x + dx, y + dy))
            .filter(|r| r.kind != RoomKind::Empty)
            .map(|r| r.kind)
            .collect()
    }

    /// Relocate `room` to the cell nearest `(to_x, to_y)` and leave an empty
    /// room behind at its old position.
    ///
    /// A landmark (entrance or fountain) sitting on the destination is
    /// swapped into the vacated cell rather than overwritten; a pit or
    /// maelstrom there is lost. Returns the room as it now sits in the grid.
    pub fn move_room(&mut self, room: Room, to_x: i32, to_y: i32) -> Room {
        let target = self.room_with_clamp(to_x, to_y);
        if target.position() == room.position() {
            return room;
        }

        let left_behind = if target.kind.is_landmark() {
            target.kind
        } else {
            RoomKind::Empty
        };
        let moved = Room::new(target.x, target.y, room.kind);

        debug!(
            "moving {:?} room from ({}, {}) to ({}, {}), replacing {:?}",
            room.kind, room.x, room.y, target.x, target.y, target.kind
        );

        self.set(Room::new(room.x, room.y, left_behind));
        self.set(moved);
        moved
    }

    fn set(&mut self, room: Room) {
        self.rows[room.y as usize][room.x as usize] = room;
    }
}

/// Rejection-sample a free cell other than the entrance for `kind`.
///
/// The caller guarantees at least one free cell, so the fallback scan
/// always succeeds.
fn place_at_random(
    cells: &mut [Vec<Option<RoomKind>>],
    kind: RoomKind,
    picker: &mut impl RoomPicker,
) {
    let size = cells.len();

    for draw in 1..=MAX_DRAWS_PER_ROOM {
        let (x, y) = picker.pick(size);
        if x >= size || y >= size {
            continue;
        }
        if cells[y][x].is_none() {
            debug!("placed {kind:?} at ({x}, {y}) after {draw} draw(s)");
            cells[y][x] = Some(kind);
            return;
        }
    }

    for (y, row) in cells.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if cell.is_none() {
                debug!("placed {kind:?} at ({x}, {y}) by scan after {MAX_DRAWS_PER_ROOM} draws");
                *cell = Some(kind);
                return;
            }
        }
    }
}
