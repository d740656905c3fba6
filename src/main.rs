use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fountain_of_objects::engine::Output;
use fountain_of_objects::{GameConfig, GameState, load_config_from_file};

fn flush_output(out: Output) -> io::Result<()> {
    print!("{}", out.render());
    io::stdout().flush()
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_config_from_file(&path).unwrap_or_else(|e| {
            fail(format!("Failed to load config file '{}': {e}", path.display()))
        }),
        None => GameConfig::builtin()
            .unwrap_or_else(|e| fail(format!("Built-in config is invalid: {e}"))),
    };

    let mut display = config.display.clone();
    if let Some(columns) = env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
    {
        display.rule_width = columns;
    }

    println!("Enter the size of the game you would like");
    for preset in &config.presets {
        println!("{}: {}", preset.key, preset.name);
    }

    let stdin = io::stdin();
    let mut selection = String::new();
    if stdin.read_line(&mut selection)? == 0 {
        fail("No game size was chosen.");
    }

    let preset = config
        .preset_for(&selection)
        .unwrap_or_else(|e| fail(format!("Invalid game size: {e}")));

    let mut rng = StdRng::from_entropy();
    let mut state = GameState::from_preset(preset, display, &mut rng)
        .unwrap_or_else(|e| fail(format!("Could not build the world: {e}")));

    loop {
        flush_output(state.begin_turn())?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nGoodbye.");
            break;
        }

        let (out, ending) = state.step(&input);
        flush_output(out)?;

        if ending.is_some() {
            break;
        }
    }

    Ok(())
}
