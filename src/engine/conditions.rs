use crate::engine::game::Game;
use crate::engine::output::Output;
use crate::world::RoomKind;

pub const WIN: &str = "You Win!";
pub const DEATH: &str = "You fall in a pit and perish";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub enum Ending {
    Won,
    Died,
}

/// The fountain is running and the player is back at the entrance.
pub fn has_won(game: &Game) -> bool {
    game.fountain.is_on() && game.current_room().kind == RoomKind::Entrance
}

/// Checked after every command: victory first, then death.
pub fn evaluate_ending(game: &Game, out: &mut Output) -> Option<Ending> {
    if has_won(game) {
        out.event(WIN);
        return Some(Ending::Won);
    }

    if !game.player.is_alive() {
        out.event(DEATH);
        return Some(Ending::Died);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::player::Player;
    use crate::world::{Direction, World};

    fn game() -> Game {
        Game::new(World::from_layout(&["EP..", "....", "...F", "...."]).unwrap())
    }

    #[test]
    fn win_needs_both_fountain_and_entrance() {
        let mut g = game();
        assert!(!has_won(&g));

        g.player = Player::at(3, 2);
        g.fountain.turn_on();
        assert!(!has_won(&g));

        g.player = Player::new();
        assert!(has_won(&g));
    }

    #[test]
    fn entrance_alone_does_not_win() {
        let g = game();
        let mut out = Output::new();
        assert_eq!(evaluate_ending(&g, &mut out), None);
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn falling_in_a_pit_ends_the_game() {
        let mut g = game();
        assert!(g.player.try_move(&mut g.world, Direction::East));

        let mut out = Output::new();
        assert_eq!(evaluate_ending(&g, &mut out), Some(Ending::Died));
        assert!(out.contains(DEATH));
    }
}
