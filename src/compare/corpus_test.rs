use std::path::PathBuf;

use super::*;
use crate::document::DEFAULT_MAX_FILE_SIZE;

fn load(sources: &[DocumentSource]) -> (Corpus, Vec<LoadFailure>) {
    Corpus::load(sources, &Normalizer::default(), DEFAULT_MAX_FILE_SIZE)
}

#[test]
fn normalizes_every_source() {
    let (corpus, failures) = load(&[
        DocumentSource::memory("a", "int x = 5; // set x\n"),
        DocumentSource::memory("b", "int b=1;"),
    ]);
    assert!(failures.is_empty());
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.canonical("a"), Some("int var = num;"));
    assert_eq!(corpus.canonical("b"), Some("int var=num;"));
}

#[test]
fn keeps_input_order() {
    let (corpus, _) = load(&[
        DocumentSource::memory("z", "x"),
        DocumentSource::memory("a", "y"),
        DocumentSource::memory("m", "z"),
    ]);
    let ids: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["z", "a", "m"]);
}

#[test]
fn duplicate_ids_load_once() {
    let (corpus, _) = load(&[
        DocumentSource::memory("a", "int x;"),
        DocumentSource::memory("a", "float y;"),
    ]);
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.canonical("a"), Some("int var;"));
}

#[test]
fn failures_are_reported_separately() {
    let missing = PathBuf::from("/definitely/not/here.c");
    let (corpus, failures) = load(&[
        DocumentSource::memory("ok", "int x;"),
        DocumentSource::from(missing.clone()),
    ]);
    assert_eq!(corpus.len(), 1);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].id, missing.display().to_string());
    assert!(matches!(failures[0].error, DocumentError::Io { .. }));
}

#[test]
fn empty_documents_are_kept() {
    let (corpus, _) = load(&[DocumentSource::memory("blank", "/* nothing */\n")]);
    assert_eq!(corpus.canonical("blank"), Some(""));
}

#[test]
fn from_canonical_skips_normalization() {
    let corpus = Corpus::from_canonical([("a", "Int X")]);
    assert_eq!(corpus.canonical("a"), Some("Int X"));
    assert_eq!(corpus.canonical("b"), None);
    assert!(!corpus.is_empty());
    assert!(Corpus::default().is_empty());
}

#[test]
fn lookup_by_id_across_many_documents() {
    let corpus = Corpus::from_canonical((0..500).map(|i| (format!("doc{i}.c"), format!("text {i}"))));
    assert_eq!(corpus.canonical("doc0.c"), Some("text 0"));
    assert_eq!(corpus.canonical("doc499.c"), Some("text 499"));
    assert_eq!(corpus.get("doc250.c").map(|d| d.id.as_str()), Some("doc250.c"));
    assert!(corpus.get("doc500.c").is_none());
}

#[test]
fn first_duplicate_wins_in_lookup() {
    let corpus = Corpus::from_canonical([("a", "first"), ("a", "second")]);
    assert_eq!(corpus.canonical("a"), Some("first"));
}

// ── file details ─────────────────────────────────────────────────

#[test]
fn documents_record_raw_size_and_extension() {
    let (corpus, _) = load(&[DocumentSource::memory("src/Main.JAVA", "int x = 5; // set x\n")]);
    let doc = corpus.get("src/Main.JAVA").unwrap();
    assert_eq!(doc.size, 20);
    assert_eq!(doc.extension.as_deref(), Some("java"));
    assert_eq!(doc.canonical, "int var = num;");
}

#[test]
fn extension_is_none_without_dot() {
    let doc = Document::new("Makefile", 3, "var");
    assert_eq!(doc.extension, None);
    assert_eq!(doc.size, 3);
}
