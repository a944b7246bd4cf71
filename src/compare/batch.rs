/// All-pairs comparison of a corpus.
///
/// Pairs are independent, so they are scored in parallel; the result is
/// sorted afterwards, which keeps the output identical across runs.
use rayon::prelude::*;
use serde::Serialize;

use super::corpus::{Corpus, Document};
use crate::error::SimilarityError;
use crate::fingerprint::{MatchSegment, effective_k, similarity, tile_segments};

/// Score (and optionally matched segments) of one document pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub left: String,
    pub right: String,
    pub score: f64,
    /// k-gram width actually used after clamping.
    pub k: usize,
    pub segments: Vec<MatchSegment>,
}

impl PairResult {
    /// Canonical characters of `left` covered by at least one segment.
    pub fn matched_chars(&self) -> usize {
        let mut spans: Vec<(usize, usize)> = self
            .segments
            .iter()
            .map(|s| (s.start1, s.start1 + s.len))
            .collect();
        spans.sort_unstable();
        let mut covered = 0;
        let mut reach = 0;
        for (start, end) in spans {
            let from = start.max(reach);
            if end > from {
                covered += end - from;
            }
            reach = reach.max(end);
        }
        covered
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Non-empty documents considered for comparison.
    pub compared_documents: usize,
    /// Ids of documents left out because normalization left them empty.
    pub skipped: Vec<String>,
    /// Pair results, highest score first.
    pub pairs: Vec<PairResult>,
    /// Mean score over all pairs; `None` when nothing was compared.
    pub average: Option<f64>,
}

/// Compare every unordered pair of non-empty documents in `corpus`.
///
/// Shared segments are only computed when `with_segments` is set, since
/// locating them costs more than scoring.
pub fn compare_all(
    corpus: &Corpus,
    k: usize,
    with_segments: bool,
) -> Result<BatchResult, SimilarityError> {
    if k == 0 {
        return Err(SimilarityError::zero_k());
    }

    let (comparable, empty): (Vec<&Document>, Vec<&Document>) = corpus
        .documents()
        .iter()
        .partition(|d| !d.canonical.is_empty());
    for doc in &empty {
        log::warn!("{}: nothing left after normalization, skipping", doc.id);
    }

    let n = comparable.len();
    let index_pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();

    let mut pairs = index_pairs
        .par_iter()
        .map(|&(i, j)| compare_pair(comparable[i], comparable[j], k, with_segments))
        .collect::<Result<Vec<_>, _>>()?;

    pairs.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.left.cmp(&b.left))
            .then_with(|| a.right.cmp(&b.right))
    });

    let average = if pairs.is_empty() {
        None
    } else {
        Some(pairs.iter().map(|p| p.score).sum::<f64>() / pairs.len() as f64)
    };

    Ok(BatchResult {
        compared_documents: n,
        skipped: empty.iter().map(|d| d.id.clone()).collect(),
        pairs,
        average,
    })
}

/// Score a single pair of documents.
pub fn compare_pair(
    left: &Document,
    right: &Document,
    k: usize,
    with_segments: bool,
) -> Result<PairResult, SimilarityError> {
    let score = similarity(&left.canonical, &right.canonical, k)?;
    let used_k = effective_k(k, &left.canonical, &right.canonical);
    let segments = if with_segments {
        tile_segments(&left.canonical, &right.canonical, used_k)
    } else {
        Vec::new()
    };
    log::debug!(
        "{} <-> {}: {:.3} (k={used_k}, {} segments)",
        left.id,
        right.id,
        score,
        segments.len()
    );

    Ok(PairResult {
        left: left.id.clone(),
        right: right.id.clone(),
        score,
        k: used_k,
        segments,
    })
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
