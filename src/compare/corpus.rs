/// Loading and normalizing a set of documents once, ahead of comparison.
///
/// The corpus is the per-document store from identifier to canonical text:
/// each source is read and normalized a single time no matter how many
/// pairs it takes part in.
use std::collections::{HashMap, HashSet};
use std::path::Path;

use rayon::prelude::*;

use crate::document::DocumentSource;
use crate::error::DocumentError;
use crate::normalize::Normalizer;

/// A normalized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub canonical: String,
    /// Size of the raw text in bytes.
    pub size: u64,
    /// Lowercased extension of the id, when it has one.
    pub extension: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, raw_size: u64, canonical: impl Into<String>) -> Self {
        let id = id.into();
        let extension = Path::new(&id)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        Self {
            canonical: canonical.into(),
            size: raw_size,
            extension,
            id,
        }
    }
}

/// A source that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub id: String,
    pub error: DocumentError,
}

#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    /// Load and normalize `sources` in parallel.
    ///
    /// Sources are deduplicated by id (first occurrence wins) and keep their
    /// input order. Sources that fail to load are returned separately.
    pub fn load(
        sources: &[DocumentSource],
        normalizer: &Normalizer,
        max_bytes: u64,
    ) -> (Self, Vec<LoadFailure>) {
        let mut seen: HashSet<String> = HashSet::new();
        let unique: Vec<&DocumentSource> = sources.iter().filter(|s| seen.insert(s.id())).collect();

        let results: Vec<Result<Document, LoadFailure>> = unique
            .par_iter()
            .map(|source| {
                let id = source.id();
                match source.load(max_bytes) {
                    Ok(raw) => {
                        let canonical = normalizer.normalize(&raw);
                        Ok(Document::new(id, raw.len() as u64, canonical))
                    }
                    Err(error) => Err(LoadFailure { id, error }),
                }
            })
            .collect();

        let mut documents = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(doc) => documents.push(doc),
                Err(failure) => failures.push(failure),
            }
        }
        (Self::from_documents(documents), failures)
    }

    /// Build a corpus from already-canonical texts.
    pub fn from_canonical<I, S, T>(docs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::from_documents(
            docs.into_iter()
                .map(|(id, canonical)| {
                    let canonical: String = canonical.into();
                    Document::new(id, canonical.len() as u64, canonical)
                })
                .collect(),
        )
    }

    fn from_documents(documents: Vec<Document>) -> Self {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (idx, doc) in documents.iter().enumerate() {
            by_id.entry(doc.id.clone()).or_insert(idx);
        }
        Self { documents, by_id }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    /// Canonical text for `id`, if loaded.
    pub fn canonical(&self, id: &str) -> Option<&str> {
        self.get(id).map(|d| d.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;
