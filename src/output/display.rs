//! Display functions for command results

use super::formatters::{create_progress_bar, format_board, format_score};
use crate::commands::{BenchmarkResult, GeneratedBoard, SolveResult};
use crate::core::Path;
use colored::Colorize;

/// Print the words found on a solved board
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n{}\n", format_board(&result.board));

    if result.words.is_empty() {
        println!("{}", "No words on this board.".yellow());
        return;
    }

    let mut current_len = 0;
    for entry in &result.words {
        let len = entry.word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n📏 {}", format!("{len} letters").bright_cyan().bold());
        }

        let word = format!("{:<16}", entry.word);
        let points = format!("+{}", entry.points);
        let points = format!("{points:>6}");
        match (&entry.path, show_paths) {
            (Some(path), true) => println!(
                "   {} {}  {}",
                word.bright_white(),
                points.bright_yellow(),
                format_path(path).dimmed()
            ),
            _ => println!(
                "   {} {}",
                word.bright_white(),
                points.bright_yellow()
            ),
        }
    }

    println!(
        "\n✅ {} words, {} points ({:.2}ms)",
        result.words.len().to_string().bright_green().bold(),
        format_score(result.total_points).bright_yellow().bold(),
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&bucket, &count) in &result.distribution {
            let pct = (count as f64 / result.total_boards as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40).green();
            println!(
                "   {:>3}-{:<3} {bar} {count:4} ({pct:5.1}%)",
                bucket,
                bucket + 9
            );
        }
    }

    if let Some((board, points)) = &result.best_board {
        println!(
            "\n🏆 {} ({} points)",
            "Richest board:".bright_cyan().bold(),
            format_score(*points).bright_yellow()
        );
        println!("{}", format_board(board));
    }
}

/// Print a batch of generated boards with their summaries
pub fn print_generated_boards(boards: &[GeneratedBoard]) {
    for (idx, generated) in boards.iter().enumerate() {
        println!(
            "\n{} {}",
            "Board".bright_cyan().bold(),
            format!("#{}", idx + 1).bright_cyan()
        );
        println!("{}", format_board(&generated.board));
        println!(
            "   {} words, up to {} points, longest: {}",
            generated.word_count.to_string().bright_green(),
            format_score(generated.max_score).bright_yellow(),
            generated
                .longest_word
                .as_deref()
                .unwrap_or("-")
                .bright_white()
        );
        let compact: Vec<String> = generated
            .board
            .rows()
            .map(|row| row.iter().collect())
            .collect();
        println!("   {}", compact.join("/").dimmed());
    }
}

fn format_path(path: &Path) -> String {
    path.positions()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
