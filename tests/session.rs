//! Full sessions driven through scripted input.

use std::io::Cursor;

use guessing_game::{
    console::Console,
    game::{Game, GameConfig},
    picker::Picker,
    range::Range,
};
use rand::{SeedableRng, rngs::StdRng};

fn config(easy: (i64, i64), full: (i64, i64)) -> GameConfig {
    GameConfig {
        machine_delay_ms: 0,
        easy_range: Range::new(easy.0, easy.1).unwrap(),
        full_range: Range::new(full.0, full.1).unwrap(),
    }
}

fn play_bytes(config: GameConfig, script: &[u8]) -> String {
    let console = Console::new(Cursor::new(script.to_vec()), Vec::new());
    let picker = Picker::with_rng(StdRng::seed_from_u64(42));
    let mut game = Game::new(config, console, picker);
    game.run().unwrap();
    String::from_utf8(game.into_console().into_output()).unwrap()
}

fn play(config: GameConfig, script: &str) -> String {
    play_bytes(config, script.as_bytes())
}

#[test]
fn quit_from_menu() {
    for token in ["4\n", "q\n", "QUIT\n", ""] {
        let output = play(config((-100, 100), (-1000, 1000)), token);
        assert!(output.contains("Welcome to The Guessing Game!"));
        assert!(output.ends_with("Thanks for playing.  Goodbye!\n"), "{token:?}");
    }
}

#[test]
fn invalid_menu_option_reprompts() {
    let output = play(config((-100, 100), (-1000, 1000)), "9\nhello\n4\n");
    assert_eq!(output.matches("Invalid menu option.").count(), 2);
    assert_eq!(output.matches("Welcome to The Guessing Game!").count(), 3);
}

#[test]
fn human_wins_with_one_duplicate() {
    // Easy range pinned to a single value so the secret is known.
    let script = "1\n7\n2\nabc\n3\n3\n9\n5\n4\n";
    let output = play(config((5, 5), (-1000, 1000)), script);
    assert!(output.contains("You must enter 1 or 2. Try again."));
    assert!(output.contains("I have chosen a number between 5 & 5!"));
    assert!(output.contains("You must enter a number. Try again."));
    assert_eq!(output.matches("You guessed this already, but ok.").count(), 1);
    assert!(output.contains("WRONG!!! Guess higher!"));
    assert!(output.contains("WRONG!!! Guess lower!"));
    assert!(output.contains("You guessed my number was 5."));
    assert!(output.contains("It took 4 guess(es) to guess the correct number!"));
    assert!(output.contains("There were 1 number(s) that were guessed more than once."));
    assert!(output.contains("guessed more than once:\n3\n"));
}

#[test]
fn human_gives_up() {
    let output = play(config((5, 5), (-1000, 1000)), "1\n2\n1\nq\n4\n");
    assert!(output.contains("Well, I guess you're giving up..."));
    assert!(output.contains("It took 1 guess(es) before you gave up!"));
    assert!(output.contains("There were 0 number(s)"));
}

#[test]
fn end_of_input_mid_round_gives_up() {
    let output = play(config((5, 5), (-1000, 1000)), "1\n2\n");
    assert!(output.contains("It took 0 guess(es) before you gave up!"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn machine_finds_human_secret() {
    let output = play(config((-100, 100), (1, 50)), "2\nseven\n99\n7\n4\n");
    assert!(output.contains("Enter a number between 1 & 50 => "));
    assert!(output.contains("You must enter a number.  Try again."));
    assert!(output.contains("Your number must be between 1 & 50. Try again."));
    assert!(output.contains("I guessed your number was 7."));
    assert!(output.contains("to guess the correct number!"));

    let guesses = output.matches("Take a guess => ").count();
    assert!((1..=50).contains(&guesses), "{guesses}");
    assert!(output.contains(&format!("It took {guesses} guess(es)")));
}

#[test]
fn backing_out_of_secret_entry_skips_stats() {
    let output = play(config((-100, 100), (1, 50)), "2\nq\n4\n");
    assert!(!output.contains("It took"));
    assert_eq!(output.matches("Welcome to The Guessing Game!").count(), 2);
}

#[test]
fn machine_plays_itself() {
    let output = play(config((-100, 100), (-20, 20)), "3\n3\n4\n");
    assert_eq!(output.matches("Congrats on winning! The winning number was").count(), 2);
    assert_eq!(
        output.matches("to guess the correct number!").count(),
        2
    );
}

#[test]
fn machine_over_full_range() {
    let output = play(config((-100, 100), (-i64::MAX, i64::MAX)), "3\n4\n");
    assert!(output.contains(&format!("between {} & {}!", -i64::MAX, i64::MAX)));
    assert!(output.contains("Congrats on winning!"));
}

#[test]
fn invalid_utf8_at_menu_reprompts() {
    let output = play_bytes(config((-100, 100), (-1000, 1000)), b"\xc3\n\xff\n4\n");
    assert_eq!(output.matches("Invalid menu option.").count(), 2);
    assert!(output.ends_with("Thanks for playing.  Goodbye!\n"));
}

#[test]
fn invalid_utf8_at_guess_reprompts() {
    let output = play_bytes(config((5, 5), (-1000, 1000)), b"1\n2\n\xff\xfe\n5\n4\n");
    assert_eq!(output.matches("You must enter a number. Try again.").count(), 1);
    assert!(output.contains("It took 1 guess(es) to guess the correct number!"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn invalid_utf8_at_secret_entry_reprompts() {
    let output = play_bytes(config((-100, 100), (1, 10)), b"2\n\xff\n3\n4\n");
    assert!(output.contains("You must enter a number.  Try again."));
    assert!(output.contains("I guessed your number was 3."));
}
