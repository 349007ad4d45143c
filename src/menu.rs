use std::str::FromStr;

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanGuesses,
    MachineGuesses,
    MachineVsMachine,
    Quit,
}

impl FromStr for Mode {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "1" => Ok(Mode::HumanGuesses),
            "2" => Ok(Mode::MachineGuesses),
            "3" => Ok(Mode::MachineVsMachine),
            "4" | "q" | "quit" => Ok(Mode::Quit),
            other => Err(GameError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    // Same range the machine plays with.
    Machine,
    Easy,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "1" => Ok(Difficulty::Machine),
            "2" => Ok(Difficulty::Easy),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

pub fn is_quit(token: &str) -> bool {
    matches!(token.trim().to_lowercase().as_str(), "q" | "quit")
}

pub const RULE: &str = "------------------------------------";

pub const MAIN_MENU: &str = "Pick a game mode:
1) You vs. The Machine
2) The Machine vs. You
3) The Machine vs. The Machine
4) Quit game";

pub const DIFFICULTY_MENU: &str = "1) Play like a Machine!  (large number range)
2) Go easy on me :(      (small number range)";
