/// The `compare` and `normalize` commands.
///
/// `compare` collects source files, normalizes each once into a corpus,
/// scores every pair and reports the result; `normalize` shows what a single
/// file looks like after normalization.
pub mod batch;
pub mod corpus;
pub mod report;

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::DocumentSource;
use crate::fingerprint::hashes;
use crate::normalize::Normalizer;
use crate::report_helpers;
use crate::walk::{self, SourceFilter};
pub use batch::{BatchResult, PairResult, compare_all, compare_pair};
pub use corpus::{Corpus, Document, LoadFailure};
use report::{SimilarityMetrics, display_limit, print_detailed, print_json, print_summary};

/// Settings for one `compare` run, after config and flags are merged.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub k: usize,
    pub threshold: f64,
    pub max_file_size: u64,
    pub show_report: bool,
    pub show_all: bool,
    pub json: bool,
}

pub fn run(
    paths: &[PathBuf],
    filter: &SourceFilter,
    opts: &CompareOptions,
) -> Result<(), Box<dyn Error>> {
    let files = walk::collect_sources(paths, filter)?;
    log::info!("{} source files collected", files.len());

    let sources: Vec<DocumentSource> = files.into_iter().map(DocumentSource::from).collect();
    let normalizer = Normalizer::default();
    let (corpus, failures) = Corpus::load(&sources, &normalizer, opts.max_file_size);
    for failure in &failures {
        log::warn!("skipping {}: {}", failure.id, failure.error);
    }

    let with_segments = opts.show_report || opts.json;
    let batch = compare_all(&corpus, opts.k, with_segments)?;
    if batch.compared_documents < 2 {
        return Err(format!(
            "at least two documents are required, found {}",
            batch.compared_documents
        )
        .into());
    }

    let metrics = SimilarityMetrics::from_batch(&batch, opts.threshold);
    let limit = display_limit(batch.pairs.len(), opts.show_all);

    if opts.json {
        print_json(&metrics, &batch.skipped, &batch.pairs[..limit])?;
    } else if opts.show_report {
        print_detailed(&metrics, &batch.pairs[..limit], batch.pairs.len(), &corpus);
    } else {
        print_summary(&metrics, &batch.pairs);
    }

    Ok(())
}

#[derive(Serialize)]
struct NormalizedOutput<'a> {
    file: String,
    k: usize,
    kgrams: usize,
    canonical: &'a str,
}

/// Print the canonical form of `path`, or a JSON object with the text and
/// its k-gram count.
pub fn run_normalize(
    path: &Path,
    k: usize,
    max_file_size: u64,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let source = DocumentSource::from(path.to_path_buf());
    let raw = source.load(max_file_size)?;
    let canonical = Normalizer::default().normalize(&raw);

    if json {
        report_helpers::print_json_stdout(&NormalizedOutput {
            file: source.id(),
            k,
            kgrams: hashes(&canonical, k).len(),
            canonical: &canonical,
        })
    } else {
        println!("{canonical}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
