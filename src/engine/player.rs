use log::debug;

use crate::world::{Direction, ENTRANCE, Room, RoomKind, World};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    x: i32,
    y: i32,
    alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Player::at(ENTRANCE.0, ENTRANCE.1)
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: i32, y: i32) -> Self {
        Player { x, y, alive: true }
    }

    /// `(x, y)`: column then row.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Attempt one step. Returns `false` when a wall is in the way.
    ///
    /// Pits kill but the player still ends up in the pit. Maelstroms fling
    /// the player one column east and two rows north of where they stood,
    /// and carry the room they left two columns west and one row south.
    pub fn try_move(&mut self, world: &mut World, direction: Direction) -> bool {
        let (dx, dy) = direction.offset();
        let Some(target) = world.room_at(self.x + dx, self.y + dy) else {
            debug!("{direction:?} from ({}, {}) is a wall", self.x, self.y);
            return false;
        };

        let destination: Room = match target.kind {
            RoomKind::Pit => {
                self.alive = false;
                target
            }
            RoomKind::Maelstrom => {
                let landing = world.room_with_clamp(self.x + 1, self.y - 2);
                if let Some(left) = world.room_at(self.x, self.y) {
                    world.move_room(left, self.x - 2, self.y + 1);
                }
                debug!(
                    "maelstrom at ({}, {}) throws the player to ({}, {})",
                    target.x, target.y, landing.x, landing.y
                );
                landing
            }
            RoomKind::Empty | RoomKind::Entrance | RoomKind::Fountain => target,
        };

        self.x = destination.x;
        self.y = destination.y;
        true
    }
}
