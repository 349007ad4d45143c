use std::io;

use anyhow::Result;
use guessing_game::{
    console::Console,
    game::{Game, GameConfig},
    picker::Picker,
    range::Range,
};

const MACHINE_DELAY_MS: u64 = 100;
const EASY_LOW: i64 = -100;
const EASY_HIGH: i64 = 100;
const FULL_LOW: i64 = -i64::MAX;
const FULL_HIGH: i64 = i64::MAX;

fn main() -> Result<()> {
    env_logger::init();

    let game_config = GameConfig {
        machine_delay_ms: MACHINE_DELAY_MS,
        easy_range: Range::new(EASY_LOW, EASY_HIGH)?,
        full_range: Range::new(FULL_LOW, FULL_HIGH)?,
    };
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut game = Game::new(game_config, console, Picker::new());
    game.run()
}
