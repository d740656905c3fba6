use crate::engine::game::Game;
use crate::engine::output::Output;
use crate::world::RoomKind;

pub const FOUNTAIN_DRIPPING: &str =
    "You hear water dripping in this room. The Fountain of Objects is here!";
pub const FOUNTAIN_REACTIVATED: &str =
    "You hear the rushing waters from the Fountain of Objects. It has been reactivated!";
pub const ENTRANCE_LIGHT: &str =
    "You see light in this room coming from outside the cavern. This is the entrance.";
pub const PIT_DRAFT: &str = "You feel a draft. There is a pit in a nearby room.";
pub const MAELSTROM_GROWL: &str = "You hear the growling and groaning of a maelstrom nearby.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Hear,
    See,
    Smell,
    Feel,
    Maelstrom,
}

/// Narration order.
pub const SENSES: [Sense; 5] = [
    Sense::Hear,
    Sense::See,
    Sense::Smell,
    Sense::Feel,
    Sense::Maelstrom,
];

impl Sense {
    pub fn perceive(self, game: &Game, out: &mut Output) {
        let (x, y) = game.player.position();

        match self {
            Sense::Hear => {
                if game.current_room().kind != RoomKind::Fountain {
                    return;
                }
                if game.fountain.is_on() {
                    out.say(FOUNTAIN_REACTIVATED);
                } else {
                    out.say(FOUNTAIN_DRIPPING);
                }
            }
            Sense::See => {
                if game.current_room().kind == RoomKind::Entrance {
                    out.say(ENTRANCE_LIGHT);
                }
            }
            // Nothing in the cavern smells yet.
            Sense::Smell => {}
            Sense::Feel => {
                if game.world.adjacent_dangers(x, y).contains(&RoomKind::Pit) {
                    out.say(PIT_DRAFT);
                }
            }
            Sense::Maelstrom => {
                if game
                    .world
                    .adjacent_dangers(x, y)
                    .contains(&RoomKind::Maelstrom)
                {
                    out.say(MAELSTROM_GROWL);
                }
            }
        }
    }
}

/// Run every sense, in order, against the current game.
pub fn sense_all(game: &Game, out: &mut Output) {
    for sense in SENSES {
        sense.perceive(game, out);
    }
}
