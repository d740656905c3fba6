pub mod engine;
pub mod world;

use std::io;

use log::info;

use engine::{Ending, Game, LOOK, Output, dispatch, evaluate_ending};
use world::{DisplaySettings, Preset, RoomPicker, World};

pub use world::{GameConfig, load_config_from_file, load_config_from_str};

pub const PROMPT: &str = "What would you like to do?";

pub struct GameState {
    pub game: Game,
    pub display: DisplaySettings,
    pub turn_index: u64,
    pub ending: Option<Ending>,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        ending: Option<Ending>,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start a game from a menu selection ("1", "2" or "3") and a world seed.
        #[wasm_bindgen(constructor)]
        pub fn new(selection: &str, seed: u64) -> Result<WasmGame, JsValue> {
            let config = GameConfig::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
            let preset = config
                .preset_for(selection)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let mut rng = StdRng::seed_from_u64(seed);
            let state = GameState::from_preset(preset, config.display.clone(), &mut rng)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame { state })
        }

        /// The opening lines of the next turn.
        #[wasm_bindgen]
        pub fn turn(&mut self) -> JsValue {
            let out = self.state.begin_turn();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                ending: self.state.ending,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and ending, if any.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, ending) = self.state.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                ending,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    pub fn new(world: World, display: DisplaySettings) -> Self {
        GameState {
            game: Game::new(world),
            display,
            turn_index: 0,
            ending: None,
        }
    }

    /// Build a fresh world for `preset` and start a game in it.
    pub fn from_preset(
        preset: &Preset,
        display: DisplaySettings,
        picker: &mut impl RoomPicker,
    ) -> io::Result<Self> {
        let world = World::build(preset.size, preset.pits, preset.maelstroms, picker)?;
        info!("starting a {} game", preset.name);
        Ok(GameState::new(world, display))
    }

    /// Opening of a turn: separator, position, what the senses pick up,
    /// then the prompt. Once the game has ended there is no next turn and nothing is printed.
    pub fn begin_turn(&mut self) -> Output {
        let mut out = Output::new();
        if self.ending.is_some() {
            return out;
        }

        out.rule(self.display.rule());
        out.status(self.game.status_line());
        dispatch(LOOK, &mut self.game, &mut out);
        out.prompt(PROMPT);
        out
    }

    /// Process a single player input; returns (output, ending?)
    pub fn step(&mut self, input: &str) -> (Output, Option<Ending>) {
        let mut out = Output::new();
        if self.ending.is_some() {
            return (out, self.ending);
        }

        self.turn_index += 1;
        dispatch(input.trim(), &mut self.game, &mut out);

        self.ending = evaluate_ending(&self.game, &mut out);
        if let Some(ending) = self.ending {
            info!("game over after {} turn(s): {ending:?}", self.turn_index);
        }

        (out, self.ending)
    }
}
