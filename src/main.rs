use anyhow::Context;
use cthulhu_engine_rs::game::{Action, Game};
use cthulhu_engine_rs::session::SessionManager;
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let Some(path) = std::env::args().nth(1).or_else(|| std::env::var("GAME_FILE").ok()) else {
        log::error!("game file is unspecified");
        anyhow::bail!("usage: cthulhu-engine-rs <game.json>");
    };

    let seed = match std::env::var("SEED") {
        Ok(seed) => Some(seed.parse::<u64>().context("SEED is invalid")?),
        Err(_) => None,
    };

    let game = std::fs::read_to_string(&path).with_context(|| format!("could not read {}", path))?;
    let game: Game = serde_json::from_str(&game).with_context(|| format!("could not parse {}", path))?;
    log::info!("Loaded game {} from {}", game.id(), path);

    let manager = SessionManager::new(seed);
    manager.insert_game(game).with_context(|| format!("{} is not a playable game", path))?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        manager.purge_games();
        if line.trim().is_empty() {
            continue;
        }
        let Ok(action) = serde_json::from_str::<Action>(&line) else {
            log::error!("Invalid action received: {}", &line);
            continue;
        };
        match manager.resolve(action) {
            Ok(game) => println!("{}", game.get_board_json()),
            Err(err) => {
                log::error!("Action rejected: {}", err);
                println!("{}", serde_json::json!({ "type": "error", "error": err.to_string() }));
            }
        }
    }

    Ok(())
}
