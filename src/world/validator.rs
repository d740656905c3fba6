use std::collections::HashSet;

use super::loader::GameConfig;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_config(config: &GameConfig) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if config.presets.is_empty() {
        errors.push(ValidationError::new("config has no presets"));
    }

    if config.display.rule_width == 0 {
        errors.push(ValidationError::new("display.rule_width must be positive"));
    }

    let mut seen_keys: HashSet<&str> = HashSet::new();

    for preset in &config.presets {
        if preset.key.is_empty() {
            errors.push(ValidationError::new(format!(
                "preset '{}' has an empty key",
                preset.name
            )));
        } else if !seen_keys.insert(preset.key.as_str()) {
            errors.push(ValidationError::new(format!(
                "preset key '{}' is used more than once",
                preset.key
            )));
        }

        if preset.name.is_empty() {
            errors.push(ValidationError::new(format!(
                "preset '{}' has an empty name",
                preset.key
            )));
        }

        if preset.size < 2 {
            errors.push(ValidationError::new(format!(
                "preset '{}' size {} is too small (minimum 2)",
                preset.name, preset.size
            )));
            continue;
        }

        // Fountain plus hazards must leave at least one free cell besides the entrance.
        let specials = preset.pits + preset.maelstroms + 1;
        if specials >= preset.size * preset.size {
            errors.push(ValidationError::new(format!(
                "preset '{}' needs {} special rooms but a {}x{} grid only has {} free",
                preset.name,
                specials,
                preset.size,
                preset.size,
                preset.size * preset.size - 1
            )));
        }
    }

    errors
}
