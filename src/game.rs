use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use log::{debug, info, warn};
use rand::{Rng, rngs::ThreadRng};

use crate::{
    console::Console,
    guess::GuessResult,
    menu::{self, DIFFICULTY_MENU, Difficulty, MAIN_MENU, Mode, RULE},
    picker::Picker,
    range::Range,
    round::{Round, State},
    stats::SessionStats,
};

pub struct GameConfig {
    pub machine_delay_ms: u64,
    pub easy_range: Range,
    pub full_range: Range,
}

pub struct Game<I, O, R: Rng = ThreadRng> {
    config: GameConfig,
    console: Console<I, O>,
    picker: Picker<R>,
}

impl<I: BufRead, O: Write, R: Rng> Game<I, O, R> {
    pub fn new(config: GameConfig, console: Console<I, O>, picker: Picker<R>) -> Self {
        Self {
            config,
            console,
            picker,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let mode = self.choose_mode()?.unwrap_or(Mode::Quit);
            info!("Selected {mode:?}");
            let round = match mode {
                Mode::HumanGuesses => self.human_guesses()?,
                Mode::MachineGuesses => self.machine_guesses()?,
                Mode::MachineVsMachine => Some(self.machine_vs_machine()?),
                Mode::Quit => {
                    self.console.say("\nThanks for playing.  Goodbye!")?;
                    return Ok(());
                }
            };
            if let Some(round) = round {
                self.report(&round)?;
            }
        }
    }

    pub fn into_console(self) -> Console<I, O> {
        self.console
    }

    fn choose_mode(&mut self) -> Result<Option<Mode>> {
        loop {
            self.console.say("\nWelcome to The Guessing Game!")?;
            self.console.say(RULE)?;
            self.console.say(MAIN_MENU)?;
            self.console.say(RULE)?;
            let Some(token) = self.console.ask("=> ")? else {
                return Ok(None);
            };
            match token.parse::<Mode>() {
                Ok(mode) => return Ok(Some(mode)),
                Err(err) => {
                    warn!("{err}");
                    self.console.say("\nInvalid menu option.  Try again.")?;
                }
            }
        }
    }

    fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            self.console.say(
                "\nDo you want to play like a machine or do you need it easy, like a human?",
            )?;
            self.console.say(RULE)?;
            self.console.say(DIFFICULTY_MENU)?;
            self.console.say(RULE)?;
            let Some(token) = self.console.ask("=> ")? else {
                return Ok(None);
            };
            match token.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(Some(difficulty)),
                Err(err) => {
                    warn!("{err}");
                    self.console.say("\nYou must enter 1 or 2. Try again.")?;
                }
            }
        }
    }

    // `None` if the player left before a secret was picked.
    fn human_guesses(&mut self) -> Result<Option<Round>> {
        let range = match self.choose_difficulty()? {
            Some(Difficulty::Machine) => self.config.full_range,
            Some(Difficulty::Easy) => self.config.easy_range,
            None => return Ok(None),
        };
        let secret = self.picker.secret(range);
        info!("Machine picked a secret between {range}");
        self.console
            .say(&format!("\nI have chosen a number between {range}!"))?;

        let mut round = Round::new(secret, range);
        while round.state() == State::Guessing {
            let token = self.console.ask("\nTake a guess => ")?;
            let token = match token {
                Some(token) if !menu::is_quit(&token) => token,
                _ => {
                    self.console.say("Well, I guess you're giving up...")?;
                    round.abort();
                    break;
                }
            };
            let guess = match token.parse::<i64>() {
                Ok(guess) => guess,
                Err(err) => {
                    warn!("Rejected guess `{token}`: {err}");
                    self.console.say("\nYou must enter a number. Try again.")?;
                    continue;
                }
            };
            if round.is_repeat(guess) {
                self.console.say("You guessed this already, but ok.")?;
            }
            let result = round.apply(guess);
            self.announce(result, || {
                format!("WINNER!!! Congrats you won! You guessed my number was {guess}.")
            })?;
        }
        Ok(Some(round))
    }

    fn machine_guesses(&mut self) -> Result<Option<Round>> {
        let range = self.config.full_range;
        self.console.say("\nPick a number and I will guess it.\n")?;
        let secret = loop {
            let Some(token) = self
                .console
                .ask(&format!("Enter a number between {range} => "))?
            else {
                return Ok(None);
            };
            if menu::is_quit(&token) {
                return Ok(None);
            }
            match token.parse::<i64>() {
                Ok(secret) if range.contains(secret) => break secret,
                Ok(secret) => {
                    warn!("Secret `{secret}` outside {range}");
                    self.console
                        .say(&format!("\nYour number must be between {range}. Try again.\n"))?;
                }
                Err(err) => {
                    warn!("Rejected secret `{token}`: {err}");
                    self.console.say("\nYou must enter a number.  Try again.\n")?;
                }
            }
        };
        let round = self.machine_loop(Round::new(secret, range), |guess| {
            format!("WINNER!!! Congrats I won! I guessed your number was {guess}.")
        })?;
        Ok(Some(round))
    }

    fn machine_vs_machine(&mut self) -> Result<Round> {
        let range = self.config.full_range;
        let secret = self.picker.secret(range);
        info!("Machine picked a secret between {range}");
        self.console
            .say(&format!("\nI have chosen a number between {range}!"))?;
        self.machine_loop(Round::new(secret, range), |guess| {
            format!("WINNER!!! Congrats on winning! The winning number was {guess}.")
        })
    }

    fn machine_loop(&mut self, mut round: Round, winner: impl Fn(i64) -> String) -> Result<Round> {
        let delay = Duration::from_millis(self.config.machine_delay_ms);
        while round.state() == State::Guessing {
            let guess = round.machine_guess(&mut self.picker)?;
            debug!("Machine guesses `{guess}` between {}", round.range());
            self.console.say(&format!("\nTake a guess => {guess}"))?;
            let result = round.apply(guess);
            self.announce(result, || winner(guess))?;
            if !result.is_win() && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(round)
    }

    fn announce(&mut self, result: GuessResult, winner: impl FnOnce() -> String) -> Result<()> {
        match result {
            GuessResult::Win => self.console.say(&winner())?,
            GuessResult::Low => self.console.say("WRONG!!! Guess higher!")?,
            GuessResult::High => self.console.say("WRONG!!! Guess lower!")?,
        }
        Ok(())
    }

    fn report(&mut self, round: &Round) -> Result<()> {
        if let Some(stats) = SessionStats::from_round(round) {
            info!(
                "Round ended {:?} after {} guess(es), {} duplicate(s)",
                stats.outcome,
                stats.total_guesses,
                stats.duplicate_count()
            );
            self.console.say(&format!("\n{stats}"))?;
        }
        Ok(())
    }
}
