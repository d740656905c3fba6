use crate::engine::fountain::Fountain;
use crate::engine::player::Player;
use crate::world::{Room, World};

/// Everything a turn can look at or change.
#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub player: Player,
    pub fountain: Fountain,
}

impl Game {
    pub fn new(world: World) -> Self {
        Game {
            world,
            player: Player::new(),
            fountain: Fountain::new(),
        }
    }

    /// The room under the player's feet.
    pub fn current_room(&self) -> Room {
        let (x, y) = self.player.position();
        self.world.room_with_clamp(x, y)
    }

    pub fn status_line(&self) -> String {
        let (x, y) = self.player.position();
        format!("You are in the room at (Row = {y}, Col = {x})")
    }
}
