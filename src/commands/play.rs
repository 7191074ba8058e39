//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type words, get points.

use crate::game::{Game, Mode, Outcome, RoundState, Session, Tick};
use crate::output::formatters::{format_board, format_score, word_placeholder};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Run the line-based game until the player quits
///
/// The clock is advanced from wall time whenever input arrives, so a timed
/// round can expire while the player is typing.
///
/// # Errors
///
/// Returns an error if reading input fails or a board cannot be dealt.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: Rng>(game: &mut Game<R>, mode: Mode) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Grid - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Trace words of 3+ letters through touching letters (diagonals count).");
    println!("Each letter cell can be used once per word. Type a word and press Enter.\n");
    println!("Commands: ':quit' to exit, ':board' to redraw, ':found' to list your words");
    if mode == Mode::Endless {
        println!("          ':new' for a new board, ':reveal' to show every answer");
    }
    println!();

    game.start(mode).context("dealing the first board")?;
    print_round(game);

    let mut last_tick = Instant::now();

    loop {
        let input = get_user_input("Word")?;

        // Catch the clock up before judging the input.
        let elapsed = last_tick.elapsed().as_secs();
        last_tick += Duration::from_secs(elapsed);
        let mut timed_out = false;
        for _ in 0..elapsed {
            if game.session_mut().tick() == Tick::TimedOut {
                timed_out = true;
                break;
            }
        }

        if timed_out {
            print_game_over(game, "Time's Up!");
            if ask_play_again()? && game.new_board()? {
                last_tick = Instant::now();
                print_round(game);
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                game.session_mut().end_round();
                print_game_over(game, "Game Over");
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":board" | ":b" => print_round(game),
            ":found" | ":f" => print_word_list(game),
            ":new" | ":n" => {
                if game.new_board()? {
                    println!("\n🔄 New board!\n");
                    last_tick = Instant::now();
                    print_round(game);
                } else {
                    println!("The board is fixed until the timer runs out.\n");
                }
            }
            ":reveal" | ":r" => {
                let revealed = reveal_remaining(game.session_mut());
                if revealed.is_empty() && game.session().mode() == Mode::Timed {
                    println!("Reveal is only available in endless mode.\n");
                } else {
                    for (word, points) in &revealed {
                        println!("  {} {}", word.bright_white(), format!("+{points}").dimmed());
                    }
                    println!(
                        "\nScore: {}\n",
                        format_score(game.session().score()).bright_cyan()
                    );
                }
            }
            "" => {}
            _ => {
                let outcome = game.session_mut().submit_word(&input);
                let word = input.to_uppercase();
                match outcome {
                    Outcome::NewlyFound(points) => {
                        println!(
                            "{} {}  Score: {}",
                            format!("✓ {word}").green().bold(),
                            format!("+{points}").bright_yellow(),
                            format_score(game.session().score()).bright_cyan()
                        );
                    }
                    Outcome::AlreadyFound => {
                        println!("{}", format!("• {word} already found").yellow());
                    }
                    Outcome::NotAWord => {
                        println!("{}", format!("✗ {word} is not on this board").red());
                    }
                }

                end_if_complete(game.session_mut());
            }
        }

        if game.session().state() == RoundState::Ended {
            print_game_over(game, "Board cleared!");
            if ask_play_again()? && game.new_board()? {
                last_tick = Instant::now();
                print_round(game);
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Reveal every remaining word, closing the round once nothing is left
fn reveal_remaining(session: &mut Session) -> Vec<(String, u32)> {
    let revealed = session.reveal_all();
    end_if_complete(session);
    revealed
}

fn end_if_complete(session: &mut Session) {
    if session.state() == RoundState::InRound && session.is_complete() {
        session.end_round();
    }
}

fn print_round<R: Rng>(game: &Game<R>) {
    let session = game.session();
    if let Some(board) = session.board() {
        println!("{}", format_board(board));
    }

    let clock = session
        .time_remaining()
        .map_or_else(|| "∞".to_string(), |t| format!("{t}s"));
    println!(
        "Score: {}   Time: {}   Found: {} / {}\n",
        format_score(session.score()).bright_cyan(),
        clock.bright_yellow(),
        session.found_count(),
        session.solutions().len()
    );
}

fn print_word_list<R: Rng>(game: &Game<R>) {
    let session = game.session();
    for word in session.solutions().by_length_desc() {
        if session.is_found(word) {
            println!("  {}", word.bright_green());
        } else if session.mode() == Mode::Endless {
            println!("  {}", word_placeholder(word).dimmed());
        }
    }
    println!();
}

fn print_game_over<R: Rng>(game: &Game<R>, message: &str) {
    let session = game.session();
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("{}", format!("    {message}").bright_green().bold());
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Your final score is {}.",
        format_score(session.score()).bright_yellow().bold()
    );
    println!(
        "  Words found: {} of {}",
        session.found_count().to_string().bright_cyan(),
        session.solutions().len()
    );
    println!("\n{}\n", "═".repeat(70).bright_cyan());
}

fn ask_play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
