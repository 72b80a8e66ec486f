//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, split_change};
use crate::commands::{AnalysisResult, BenchmarkResult, NeighborsResult, SolveResult};
use colored::Colorize;

/// Print a solved ladder, one rung per line with the changed letter marked
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let path = &result.response.path;

    println!("\n{}", "─".repeat(60).cyan());
    if let (Some(first), Some(last)) = (path.first(), path.last()) {
        println!(
            "Ladder: {} → {}",
            first.to_uppercase().bright_yellow().bold(),
            last.to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, word) in path.iter().enumerate() {
        let rung = match i.checked_sub(1).and_then(|prev| split_change(&path[prev], word)) {
            Some((before, changed, after)) => format!(
                "{}{}{}",
                before.to_uppercase(),
                changed.to_uppercase().bright_green().bold(),
                after.to_uppercase()
            ),
            None => word.to_uppercase(),
        };
        println!("  {i:>2}: {rung}");
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Distance: {} step{}",
            result.response.distance_between_words,
            if result.response.distance_between_words == 1 { "" } else { "s" }
        )
        .green()
        .bold()
    );

    if verbose {
        println!("   Path:  {}", format_path(path));
        println!("   Time:  {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print neighbors grouped by changed position
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n{}", "⚠ word is not in the dictionary".yellow());
    }

    for (position, words) in result.by_position.iter().enumerate() {
        let marker: String = result
            .word
            .chars()
            .enumerate()
            .map(|(i, c)| if i == position { '_' } else { c })
            .collect();
        let listed = if words.is_empty() {
            "-".bright_black().to_string()
        } else {
            words.join(" ")
        };
        println!("  {}  {}", marker.to_uppercase(), listed);
    }

    println!("\n📊 {} neighbor(s)", result.total());
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LADDER ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} {}-letter words:", result.bucket_size, result.word.len());
    println!("   Neighbors:   {}", result.degree);
    println!(
        "   Reachable:   {} ({:.1}%)",
        format!("{}", result.component_size).bright_yellow(),
        result.coverage() * 100.0
    );

    match &result.farthest {
        Some((word, distance)) => println!(
            "   Farthest:    {} at {} steps",
            word.to_uppercase().bright_green(),
            distance
        ),
        None => println!("   Farthest:    {}", "isolated word".yellow()),
    }

    println!("\n📈 {}", "Words by distance:".bright_cyan().bold());
    let max = result.layer_sizes.iter().copied().max().unwrap_or(1) as f64;
    for (distance, &size) in result.layer_sizes.iter().enumerate() {
        let bar = create_progress_bar(size as f64, max, 40);
        println!("   {distance:>2}: {} {size:5}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Word length:      {}", result.length);
    println!("   Pairs tested:     {}", result.total_pairs);
    println!("   Reachable:        {}", format!("{}", result.reachable).green());
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    if result.limited > 0 {
        println!("   Hit limits:       {}", format!("{}", result.limited).red());
    }
    println!(
        "   Average distance: {}",
        format!("{:.2}", result.average_distance)
            .bright_yellow()
            .bold()
    );
    if let Some((first, last)) = &result.longest {
        println!(
            "   Longest ladder:   {} ({} → {})",
            result.max_distance,
            first.to_uppercase(),
            last.to_uppercase()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.reachable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&distance, &count) in &result.distribution {
        let pct = (count as f64 / result.reachable as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {distance:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
