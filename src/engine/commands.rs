use log::debug;

use crate::engine::game::Game;
use crate::engine::output::Output;
use crate::engine::senses::sense_all;
use crate::world::Direction;

pub const WALL: &str = "There is a wall there";
pub const MISSING_DIRECTION: &str = "You must enter a direction";
pub const TOO_MANY_DIRECTIONS: &str = "You must enter a single direction to move in";

pub const LOOK: &str = "look";
pub const MOVE: &str = "move";
pub const ENABLE_FOUNTAIN: &str = "enable fountain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Look,
    Move,
    EnableFountain,
}

/// Dispatch order. Every command sees every line.
pub const COMMANDS: [Command; 3] = [Command::Look, Command::Move, Command::EnableFountain];

impl Command {
    /// Run this command if `input` is meant for it. Returns whether it was.
    pub fn execute(self, input: &str, game: &mut Game, out: &mut Output) -> bool {
        match self {
            Command::Look => {
                if input != LOOK {
                    return false;
                }
                sense_all(game, out);
                true
            }
            Command::Move => {
                let mut tokens = input.split_whitespace();
                if tokens.next() != Some(MOVE) {
                    return false;
                }
                let args: Vec<&str> = tokens.collect();
                handle_move(&args, game, out);
                true
            }
            Command::EnableFountain => {
                if input != ENABLE_FOUNTAIN {
                    return false;
                }
                game.fountain.turn_on();
                true
            }
        }
    }
}

fn handle_move(args: &[&str], game: &mut Game, out: &mut Output) {
    match args {
        [] => out.say(MISSING_DIRECTION),
        [word] => match Direction::parse(word) {
            Some(direction) => {
                if !game.player.try_move(&mut game.world, direction) {
                    out.say(WALL);
                }
            }
            None => out.say(format!("You can't move '{word}'. Try north, south, east, or west.")),
        },
        _ => out.say(TOO_MANY_DIRECTIONS),
    }
}

/// Offer `input` to every command in order. Returns how many took it.
pub fn dispatch(input: &str, game: &mut Game, out: &mut Output) -> usize {
    let mut handled = 0;
    for command in COMMANDS {
        if command.execute(input, game, out) {
            handled += 1;
        }
    }

    if handled == 0 {
        debug!("no command understood {input:?}");
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Player;
    use crate::engine::senses::{ENTRANCE_LIGHT, FOUNTAIN_DRIPPING};
    use crate::world::World;

    fn small_game() -> Game {
        Game::new(World::from_layout(&["E...", "....", "...F", "...."]).unwrap())
    }

    fn run(input: &str, game: &mut Game) -> Output {
        let mut out = Output::new();
        dispatch(input, game, &mut out);
        out
    }

    #[test]
    fn blocked_move_reports_a_wall() {
        let mut game = small_game();
        let out = run("move north", &mut game);

        assert!(out.contains(WALL));
        assert_eq!(game.player.position(), (0, 0));
    }

    #[test]
    fn malformed_moves_change_nothing() {
        let mut game = small_game();

        let out = run("move", &mut game);
        assert!(out.contains(MISSING_DIRECTION));

        let out = run("move north south", &mut game);
        assert!(out.contains(TOO_MANY_DIRECTIONS));

        assert_eq!(game.player, Player::new());
    }

    #[test]
    fn unknown_direction_is_reported() {
        let mut game = small_game();
        let out = run("move up", &mut game);

        assert!(out.contains("You can't move 'up'. Try north, south, east, or west."));
        assert_eq!(game.player.position(), (0, 0));
    }

    #[test]
    fn look_runs_the_senses() {
        let mut game = small_game();
        assert!(run("look", &mut game).contains(ENTRANCE_LIGHT));

        game.player = Player::at(3, 2);
        assert!(run("look", &mut game).contains(FOUNTAIN_DRIPPING));
    }

    #[test]
    fn enable_fountain_is_silent() {
        let mut game = small_game();
        let out = run("enable fountain", &mut game);

        assert!(out.blocks.is_empty());
        assert!(game.fountain.is_on());
    }

    #[test]
    fn triggers_are_exact_and_case_sensitive() {
        let mut game = small_game();
        let mut out = Output::new();

        assert_eq!(dispatch("Look", &mut game, &mut out), 0);
        assert_eq!(dispatch("look around", &mut game, &mut out), 0);
        assert_eq!(dispatch("enable the fountain", &mut game, &mut out), 0);
        assert_eq!(dispatch("moveeast", &mut game, &mut out), 0);
        assert!(out.blocks.is_empty());
        assert!(!game.fountain.is_on());
    }

    #[test]
    fn each_line_reaches_exactly_one_command() {
        let mut game = small_game();
        let mut out = Output::new();

        for input in ["look", "move east", "enable fountain"] {
            assert_eq!(dispatch(input, &mut game, &mut out), 1);
        }
    }
}
