mod commands;
mod conditions;
mod fountain;
mod game;
mod output;
mod player;
mod senses;

pub use commands::{
    COMMANDS, Command, ENABLE_FOUNTAIN, LOOK, MISSING_DIRECTION, TOO_MANY_DIRECTIONS, WALL,
    dispatch,
};
pub use conditions::{DEATH, Ending, WIN, evaluate_ending, has_won};
pub use fountain::Fountain;
pub use game::Game;
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use senses::{
    ENTRANCE_LIGHT, FOUNTAIN_DRIPPING, FOUNTAIN_REACTIVATED, MAELSTROM_GROWL, PIT_DRAFT, SENSES,
    Sense, sense_all,
};
