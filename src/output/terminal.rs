// Colored terminal output for similarity runs.
//
// This module handles all terminal-specific formatting: colors and flags for
// pairs above the threshold. The main.rs command handlers delegate here.

use colored::Colorize;

use super::{format_percent, truncate_chars};
use crate::corpus::SkipWarning;
use crate::pipeline::check::{DocumentInfo, SimilarityReport};
use crate::scoring::risk::{PlagiarismBadge, RiskLevel};

/// List the documents that made it into the corpus.
pub fn display_loaded_documents(documents: &[DocumentInfo]) {
    println!("\n{}", "Loaded documents:".bold());
    for doc in documents {
        println!("  - {}: {} characters", doc.id, doc.characters);
    }
}

/// Itemize skipped files. Prints nothing when there are none.
pub fn display_warnings(warnings: &[SkipWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!(
        "\n{}",
        format!("{} file(s) skipped:", warnings.len()).yellow()
    );
    for warning in warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Print the summary block and the top-match badge.
pub fn display_summary(report: &SimilarityReport) {
    let s = &report.summary;
    println!("\n{}", "=== Detailed Similarity Report ===".bold());
    println!();
    println!("  Total Documents    : {}", s.total_documents);
    println!("  Total Comparisons  : {}", s.total_comparisons);
    println!(
        "  Highest Similarity : {} <--> {} = {}",
        s.highest.doc_a,
        s.highest.doc_b,
        format_percent(s.highest.score).bold()
    );
    println!(
        "  Lowest Similarity  : {} <--> {} = {}",
        s.lowest.doc_a,
        s.lowest.doc_b,
        format_percent(s.lowest.score)
    );
    println!("  Average Similarity : {}", format_percent(s.average));
    println!(
        "  Plagiarism Status  : {}",
        colorize_badge(report.top_badge())
    );
}

/// Print every ranked pair, flagging the ones at or above the threshold.
pub fn display_results(report: &SimilarityReport) {
    println!(
        "\n{}",
        format!(
            "=== Similarity Results (threshold {}) ===",
            format_percent(report.threshold)
        )
        .bold()
    );
    println!();

    for result in &report.results {
        let pair = format!(
            "{} <--> {}",
            truncate_chars(&result.doc_a, 40),
            truncate_chars(&result.doc_b, 40)
        );
        let score = format_percent(result.score);
        if report.is_flagged(result) {
            println!(
                "  {} {} : {}  [{}]",
                "+".green().bold(),
                pair,
                score.bold(),
                colorize_risk(result.risk)
            );
        } else {
            println!(
                "  {} {} : {}  [{}]",
                "-".dimmed(),
                pair.dimmed(),
                score.dimmed(),
                result.risk.as_str().dimmed()
            );
        }
    }

    let flagged = report.above_threshold().count();
    println!();
    if flagged > 0 {
        println!(
            "  {} {} pair(s) at or above {}",
            "!!".red().bold(),
            flagged,
            format_percent(report.threshold)
        );
    } else {
        println!(
            "  {} No pairs at or above {}",
            "~".green(),
            format_percent(report.threshold)
        );
    }
}

/// Colorize a risk level.
fn colorize_risk(risk: RiskLevel) -> colored::ColoredString {
    let label = risk.as_str();
    match risk {
        RiskLevel::High => label.red().bold(),
        RiskLevel::Medium => label.bright_red(),
        RiskLevel::Mild => label.yellow(),
        RiskLevel::Safe => label.green(),
    }
}

fn colorize_badge(badge: PlagiarismBadge) -> colored::ColoredString {
    let label = badge.as_str();
    match badge {
        PlagiarismBadge::Plagiarized => label.red().bold(),
        PlagiarismBadge::HighlySimilar => label.bright_red(),
        PlagiarismBadge::PossiblyInspired => label.yellow(),
        PlagiarismBadge::LikelyOriginal => label.green(),
    }
}
