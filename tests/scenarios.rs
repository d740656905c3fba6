use rand::SeedableRng;
use rand::rngs::StdRng;

use fountain_of_objects::engine::{
    DEATH, ENTRANCE_LIGHT, Ending, FOUNTAIN_DRIPPING, FOUNTAIN_REACTIVATED, MISSING_DIRECTION,
    OutputBlock, Player, TOO_MANY_DIRECTIONS, WALL, WIN,
};
use fountain_of_objects::world::{DisplaySettings, RoomKind, World};
use fountain_of_objects::{GameConfig, GameState, PROMPT};

fn display() -> DisplaySettings {
    DisplaySettings {
        rule_width: 10,
        rule_char: '=',
    }
}

fn state(layout: &[&str]) -> GameState {
    GameState::new(World::from_layout(layout).unwrap(), display())
}

#[test]
fn turn_opens_with_rule_position_senses_and_prompt() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    let out = s.begin_turn();

    assert_eq!(
        out.blocks,
        vec![
            OutputBlock::Rule("==========".to_string()),
            OutputBlock::Status("You are in the room at (Row = 0, Col = 0)".to_string()),
            OutputBlock::Text(ENTRANCE_LIGHT.to_string()),
            OutputBlock::Prompt(PROMPT.to_string()),
        ]
    );
}

#[test]
fn moving_north_from_the_entrance_hits_a_wall() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    let (out, ending) = s.step("move north");

    assert!(out.contains(WALL));
    assert_eq!(ending, None);
    assert_eq!(s.game.player.position(), (0, 0));
}

#[test]
fn malformed_moves_keep_the_turn_alive() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);

    let (out, ending) = s.step("move");
    assert!(out.contains(MISSING_DIRECTION));
    assert_eq!(ending, None);

    let (out, ending) = s.step("move north south");
    assert!(out.contains(TOO_MANY_DIRECTIONS));
    assert_eq!(ending, None);

    assert_eq!(s.game.player, Player::new());
}

#[test]
fn dry_fountain_drips_when_looked_at() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    s.step("move east");
    s.step("move east");

    let (out, _) = s.step("look");
    assert!(out.contains(FOUNTAIN_DRIPPING));
    assert!(!out.contains(FOUNTAIN_REACTIVATED));

    let opening = s.begin_turn();
    assert!(opening.contains("You are in the room at (Row = 0, Col = 2)"));
    assert!(opening.contains(FOUNTAIN_DRIPPING));
}

#[test]
fn enabling_the_fountain_and_returning_wins() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);

    for input in ["move east", "move east", "enable fountain", "look", "move west"] {
        let (_, ending) = s.step(input);
        assert_eq!(ending, None, "game ended early on {input:?}");
    }

    let (out, ending) = s.step("move west");
    assert_eq!(ending, Some(Ending::Won));
    assert!(out.contains(WIN));
}

#[test]
fn enabling_the_fountain_at_the_entrance_wins_at_once() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    let (out, ending) = s.step("enable fountain");

    assert_eq!(ending, Some(Ending::Won));
    assert!(out.contains(WIN));
}

#[test]
fn walking_into_a_pit_is_fatal() {
    let mut s = state(&["EP..", "....", "...F", "...."]);
    let (out, ending) = s.step("move east");

    assert_eq!(ending, Some(Ending::Died));
    assert!(out.contains(DEATH));
    assert_eq!(s.game.player.position(), (1, 0));

    let (after, again) = s.step("move west");
    assert!(after.blocks.is_empty());
    assert_eq!(again, Some(Ending::Died));
}

#[test]
fn no_turn_opens_after_the_game_ends() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    let (_, ending) = s.step("enable fountain");
    assert_eq!(ending, Some(Ending::Won));

    assert!(s.begin_turn().blocks.is_empty());
    assert_eq!(s.ending, Some(Ending::Won));
}

#[test]
fn maelstrom_relocates_player_and_empties_their_old_room() {
    let mut s = state(&["E...", "....", "..M.", "...F"]);
    s.game.player = Player::at(1, 2);

    let (_, ending) = s.step("move east");

    assert_eq!(ending, None);
    assert_eq!(s.game.player.position(), (2, 0));
    assert_eq!(s.game.world.room_at(1, 2).unwrap().kind, RoomKind::Empty);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let mut s = state(&["E.F.", "....", "....", "...P"]);
    s.step("  move east\n");
    assert_eq!(s.game.player.position(), (1, 0));
}

#[test]
fn presets_build_playable_worlds() {
    let config = GameConfig::builtin().unwrap();

    for key in ["1", "2", "3"] {
        let preset = config.preset_for(key).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let s = GameState::from_preset(preset, config.display.clone(), &mut rng).unwrap();

        assert_eq!(s.game.world.size(), preset.size);
        assert_eq!(s.game.current_room().kind, RoomKind::Entrance);
        assert!(s.game.player.is_alive());
        assert!(!s.game.fountain.is_on());
    }
}

#[test]
fn invalid_menu_choice_is_an_error() {
    let config = GameConfig::builtin().unwrap();
    assert!(config.preset_for("0").is_err());
    assert!(config.preset_for("").is_err());
}
