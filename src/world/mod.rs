mod grid;
mod loader;
mod model;
mod validator;

pub use grid::{ENTRANCE, RoomPicker, World};
pub use loader::{
    DisplaySettings, GameConfig, Preset, load_config_from_file, load_config_from_str,
};
pub use model::{Direction, Room, RoomKind};
pub use validator::{ValidationError, validate_config};
