pub mod console;
pub mod error;
pub mod game;
pub mod guess;
pub mod history;
pub mod menu;
pub mod picker;
pub mod range;
pub mod round;
pub mod stats;
