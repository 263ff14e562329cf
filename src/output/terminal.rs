// Colored terminal output for word clouds and sentiment reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// bars. The main.rs commands delegate here unless --json is given.

use colored::Colorize;

use super::{one_line, truncate_chars};
use crate::sentiment::report::SentimentReport;
use crate::sentiment::SentimentLabel;
use crate::wordcloud::WordFrequency;

/// Widest frequency bar, in characters.
const BAR_WIDTH: usize = 30;

/// Display a ranked word list with proportional bars.
pub fn display_word_cloud(words: &[WordFrequency]) {
    if words.is_empty() {
        println!("No content words found in this snapshot.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Word Cloud (top {} words) ===", words.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<24} {:>6}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Count".dimmed(),
    );
    println!("  {}", "-".repeat(40 + BAR_WIDTH).dimmed());

    let max = words.iter().map(|w| w.value).max().unwrap_or(1).max(1);
    for (i, word) in words.iter().enumerate() {
        let width = ((word.value as f64 / max as f64) * BAR_WIDTH as f64).ceil() as usize;
        println!(
            "  {:>4}. {:<24} {:>6}  {}",
            i + 1,
            word.text,
            word.value,
            "#".repeat(width).cyan(),
        );
    }
    println!();
}

/// Display the per-topic sentiment table and an overall tally.
pub fn display_sentiment_report(report: &SentimentReport) {
    if report.topics.is_empty() {
        println!("No clustered topics in this snapshot.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Topic Sentiment ({} topics) ===", report.total_topics).bold()
    );
    println!();

    println!(
        "  {:>5}  {:<36} {:>6}  {:<10} {:>7}  {:>11}",
        "Topic".dimmed(),
        "Name".dimmed(),
        "Docs".dimmed(),
        "Sentiment".dimmed(),
        "Score".dimmed(),
        "+ / - / =".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for topic in &report.topics {
        let dist = &topic.label_distribution;
        println!(
            "  {:>5}  {:<36} {:>6}  {:<10} {:>7.3}  {:>3} /{:>3} /{:>3}",
            topic.topic_id,
            truncate_chars(&topic.topic_name, 33),
            topic.count,
            colorize_label(topic.majority_label),
            topic.mean_score,
            dist.positive,
            dist.negative,
            dist.neutral,
        );
        if let Some(sample) = topic.sample_docs.first() {
            println!(
                "         {}",
                truncate_chars(&one_line(sample), 100).dimmed()
            );
        }
    }
    println!();

    let count = |label: SentimentLabel| {
        report
            .topics
            .iter()
            .filter(|t| t.majority_label == label)
            .count()
    };
    println!(
        "  {} positive  {} negative  {} neutral",
        count(SentimentLabel::Positive).to_string().green(),
        count(SentimentLabel::Negative).to_string().red(),
        count(SentimentLabel::Neutral).to_string().dimmed(),
    );
}

/// Colorize a sentiment label.
fn colorize_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green(),
        SentimentLabel::Negative => label.as_str().red(),
        SentimentLabel::Neutral => label.as_str().dimmed(),
    }
}
