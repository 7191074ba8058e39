//! Formatting utilities for terminal output

use crate::core::Board;
use colored::Colorize;

/// Render a board as a boxed grid of letters
#[must_use]
pub fn format_board(board: &Board) -> String {
    let width = board.size() * 4 + 1;
    let mut out = String::new();

    out.push_str(&format!("  ╭{}╮\n", "─".repeat(width)));
    for row in board.rows() {
        let letters: String = row
            .iter()
            .map(|c| format!(" {} ", c.to_string().bright_white().bold()))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  │ {letters} │\n"));
    }
    out.push_str(&format!("  ╰{}╯", "─".repeat(width)));
    out
}

/// Format a score with thousands separators
#[must_use]
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Hide a word behind one underscore per letter
#[must_use]
pub fn word_placeholder(word: &str) -> String {
    "_ ".repeat(word.chars().count()).trim_end().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
