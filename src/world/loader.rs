use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use super::validator::validate_config;

/// Built-in presets: Small, Medium and Large.
const DEFAULT_CONFIG: &str = include_str!("../../public/fountain.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    preset: Vec<PresetConfig>, // [[preset]] blocks
}

#[derive(Deserialize)]
struct DisplayConfig {
    #[serde(default = "default_rule_width")]
    rule_width: usize,
    #[serde(default = "default_rule_char")]
    rule_char: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            rule_width: default_rule_width(),
            rule_char: default_rule_char(),
        }
    }
}

#[derive(Deserialize)]
struct PresetConfig {
    key: String,
    name: String,
    size: usize,
    #[serde(default)]
    pits: usize,
    #[serde(default)]
    maelstroms: usize,
}

fn default_rule_width() -> usize {
    80
}

fn default_rule_char() -> String {
    "=".to_string()
}

///////////////////////
/// RUNTIME CONFIG  ///
///////////////////////

/// A difficulty the player can pick at the start menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub key: String,
    pub name: String,
    pub size: usize,
    pub pits: usize,
    pub maelstroms: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub rule_width: usize,
    pub rule_char: char,
}

impl DisplaySettings {
    /// The separator printed at the start of every turn.
    pub fn rule(&self) -> String {
        std::iter::repeat_n(self.rule_char, self.rule_width).collect()
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub display: DisplaySettings,
    pub presets: Vec<Preset>,
}

impl GameConfig {
    /// The embedded Small/Medium/Large presets.
    pub fn builtin() -> io::Result<GameConfig> {
        load_config_from_str(DEFAULT_CONFIG)
    }

    /// Resolve a menu selection (the text the player typed) to a preset.
    pub fn preset_for(&self, selection: &str) -> io::Result<&Preset> {
        let selection = selection.trim();
        self.presets
            .iter()
            .find(|p| p.key == selection)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{selection}' is not one of the offered game sizes"),
                )
            })
    }
}

pub fn load_config_from_file(path: &Path) -> io::Result<GameConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

pub fn load_config_from_str(contents: &str) -> io::Result<GameConfig> {
    let file: ConfigFile = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut chars = file.display.rule_char.chars();
    let rule_char = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "display.rule_char must be a single character, got '{}'",
                    file.display.rule_char
                ),
            ));
        }
    };

    let presets = file
        .preset
        .into_iter()
        .map(|p| Preset {
            key: p.key.trim().to_string(),
            name: p.name.trim().to_string(),
            size: p.size,
            pits: p.pits,
            maelstroms: p.maelstroms,
        })
        .collect();

    let config = GameConfig {
        display: DisplaySettings {
            rule_width: file.display.rule_width,
            rule_char,
        },
        presets,
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            log::warn!("config: {}", e.message);
        }
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(io::Error::new(io::ErrorKind::InvalidData, joined));
    }

    Ok(config)
}
