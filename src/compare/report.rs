use serde::Serialize;

use super::batch::{BatchResult, PairResult};
use super::corpus::{Corpus, Document};
use crate::report_helpers;

/// Characters of canonical text shown per matched segment.
const SNIPPET_CHARS: usize = 60;

/// Segments listed per pair in the detailed report.
const SEGMENTS_PER_PAIR: usize = 5;

/// Summary metrics for a comparison run.
#[derive(Debug, Serialize)]
pub struct SimilarityMetrics {
    pub documents: usize,
    pub pairs_compared: usize,
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub flagged_pairs: usize,
    pub threshold: f64,
}

impl SimilarityMetrics {
    pub fn from_batch(batch: &BatchResult, threshold: f64) -> Self {
        Self {
            documents: batch.compared_documents,
            pairs_compared: batch.pairs.len(),
            average: batch.average,
            highest: batch.pairs.first().map(|p| p.score),
            flagged_pairs: batch.pairs.iter().filter(|p| p.score >= threshold).count(),
            threshold,
        }
    }
}

/// Classify the highest pair score into a human-readable assessment label.
fn assessment(highest: Option<f64>) -> &'static str {
    match highest {
        None => "Nothing compared",
        Some(s) if s < 0.3 => "Distinct",
        Some(s) if s < 0.5 => "Low overlap",
        Some(s) if s < 0.7 => "Moderate overlap",
        Some(s) if s < 0.9 => "Suspicious",
        Some(_) => "Near-identical",
    }
}

fn percent(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}%", s * 100.0),
        None => "-".to_string(),
    }
}

/// Print a summary of the comparison run.
pub fn print_summary(metrics: &SimilarityMetrics, pairs: &[PairResult]) {
    let separator = report_helpers::separator(68);

    println!("{separator}");
    println!(" Similarity Analysis");
    println!();
    println!(" Documents compared:   {:>42}", metrics.documents);
    println!(" Pairs compared:       {:>42}", metrics.pairs_compared);
    println!(" Average similarity:   {:>42}", percent(metrics.average));
    println!(" Highest similarity:   {:>42}", percent(metrics.highest));
    if let Some(top) = pairs.first() {
        println!(" Most similar pair:    {:>42}", format!("{} / {}", top.left, top.right));
    }
    println!();
    println!(
        " Flagged (>= {:>5.1}%):  {:>42}",
        metrics.threshold * 100.0,
        metrics.flagged_pairs
    );
    println!();
    println!(" Assessment:           {:>42}", assessment(metrics.highest));
    println!("{separator}");
}

/// Maximum pairs shown by default (use `--show-all` to override).
pub const DEFAULT_PAIR_LIMIT: usize = 20;

/// Compute how many pairs to display based on the `--show-all` flag.
pub fn display_limit(total: usize, show_all: bool) -> usize {
    if show_all {
        total
    } else {
        DEFAULT_PAIR_LIMIT.min(total)
    }
}

/// Up to `max_chars` characters of `text` starting at character `start`,
/// on one line.
fn snippet(text: &str, start: usize, len: usize, max_chars: usize) -> String {
    let take = len.min(max_chars);
    let mut out: String = text
        .chars()
        .skip(start)
        .take(take)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if len > take {
        out.push_str("...");
    }
    out
}

/// Extension and raw size of a document, e.g. `c, 2.0 KB`.
fn file_info(doc: &Document) -> String {
    format!(
        "{}, {:.1} KB",
        doc.extension.as_deref().unwrap_or("-"),
        doc.size as f64 / 1024.0
    )
}

/// Print the summary followed by each pair with its score and the longest
/// shared segments of canonical text.
pub fn print_detailed(
    metrics: &SimilarityMetrics,
    pairs: &[PairResult],
    total_pairs: usize,
    corpus: &Corpus,
) {
    print_summary(metrics, pairs);

    if pairs.is_empty() {
        return;
    }

    let separator = report_helpers::separator(68);
    let width = report_helpers::max_label_width(
        pairs.iter().flat_map(|p| [p.left.as_str(), p.right.as_str()]),
        8,
    );

    println!();
    println!(" Document Pairs (sorted by similarity)");

    for (i, pair) in pairs.iter().enumerate() {
        let flag = if pair.score >= metrics.threshold {
            "FLAGGED"
        } else {
            "ok"
        };
        println!();
        println!("{separator}");
        println!(
            " [{}] {:>6.1}%  {}  (k={})",
            i + 1,
            pair.score * 100.0,
            flag,
            pair.k
        );
        for id in [&pair.left, &pair.right] {
            println!(
                "   {}  {}",
                report_helpers::pad_right(id, width),
                corpus.get(id).map(file_info).unwrap_or_default()
            );
        }

        if pair.segments.is_empty() {
            continue;
        }

        let mut longest: Vec<_> = pair.segments.iter().collect();
        longest.sort_by(|a, b| b.len.cmp(&a.len).then_with(|| a.cmp(b)));
        let left_text = corpus.canonical(&pair.left).unwrap_or_default();

        println!();
        println!(
            " Shared segments: {} ({} chars of left document)",
            pair.segments.len(),
            pair.matched_chars()
        );
        for seg in longest.iter().take(SEGMENTS_PER_PAIR) {
            println!(
                "   @{}/@{} ({} chars): {}",
                seg.start1,
                seg.start2,
                seg.len,
                snippet(left_text, seg.start1, seg.len, SNIPPET_CHARS)
            );
        }
        if pair.segments.len() > SEGMENTS_PER_PAIR {
            println!("   ...");
        }
    }

    println!("{separator}");

    if pairs.len() < total_pairs {
        println!();
        println!(" Showing top {} of {} pairs.", pairs.len(), total_pairs);
        println!(" Use --show-all to see all pairs.");
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    metrics: JsonMetrics,
    skipped: &'a [String],
    pairs: &'a [PairResult],
}

#[derive(Serialize)]
struct JsonMetrics {
    documents: usize,
    pairs_compared: usize,
    average_similarity: Option<f64>,
    highest_similarity: Option<f64>,
    threshold: f64,
    flagged_pairs: usize,
    assessment: &'static str,
}

fn json_output<'a>(
    metrics: &SimilarityMetrics,
    skipped: &'a [String],
    pairs: &'a [PairResult],
) -> JsonOutput<'a> {
    JsonOutput {
        metrics: JsonMetrics {
            documents: metrics.documents,
            pairs_compared: metrics.pairs_compared,
            average_similarity: metrics.average,
            highest_similarity: metrics.highest,
            threshold: metrics.threshold,
            flagged_pairs: metrics.flagged_pairs,
            assessment: assessment(metrics.highest),
        },
        skipped,
        pairs,
    }
}

/// Print metrics and pairs as pretty-printed JSON to stdout.
pub fn print_json(
    metrics: &SimilarityMetrics,
    skipped: &[String],
    pairs: &[PairResult],
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&json_output(metrics, skipped, pairs))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
