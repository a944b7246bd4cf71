use std::fs;

use super::*;
use crate::document::DEFAULT_MAX_FILE_SIZE;

fn c_filter() -> SourceFilter {
    SourceFilter::new(&["c".to_string()], &[]).unwrap()
}

fn options() -> CompareOptions {
    CompareOptions {
        k: 5,
        threshold: 0.8,
        max_file_size: DEFAULT_MAX_FILE_SIZE,
        show_report: false,
        show_all: false,
        json: false,
    }
}

const SOURCE: &str = "int total(int n) {\n    int sum = 0;\n    for (int i = 0; i < n; i++) {\n        sum += i; // accumulate\n    }\n    return sum;\n}\n";
const RENAMED: &str = "int total(int count) {\n    int acc = 0;\n    for (int j = 0; j < count; j++) {\n        acc += j;\n    }\n    return acc;\n}\n";

#[test]
fn run_on_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    fs::write(dir.path().join("b.c"), RENAMED).unwrap();
    run(&[dir.path().to_path_buf()], &c_filter(), &options()).unwrap();
}

#[test]
fn run_with_report_and_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    fs::write(dir.path().join("b.c"), RENAMED).unwrap();
    fs::write(dir.path().join("c.c"), "void f() { g(\"hello\"); }\n").unwrap();
    let paths = [dir.path().to_path_buf()];

    let report = CompareOptions {
        show_report: true,
        ..options()
    };
    run(&paths, &c_filter(), &report).unwrap();

    let json = CompareOptions {
        json: true,
        show_all: true,
        ..options()
    };
    run(&paths, &c_filter(), &json).unwrap();
}

#[test]
fn run_accepts_explicit_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("first.txt");
    let b = dir.path().join("second.txt");
    fs::write(&a, SOURCE).unwrap();
    fs::write(&b, RENAMED).unwrap();
    // Extension filtering only applies to walked directories.
    run(&[a, b], &c_filter(), &options()).unwrap();
}

#[test]
fn run_needs_two_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    let err = run(&[dir.path().to_path_buf()], &c_filter(), &options()).unwrap_err();
    assert!(err.to_string().contains("at least two documents"));
}

#[test]
fn run_does_not_count_empty_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    fs::write(dir.path().join("b.c"), "// only a comment\n").unwrap();
    assert!(run(&[dir.path().to_path_buf()], &c_filter(), &options()).is_err());
}

#[test]
fn run_skips_unreadable_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    fs::write(dir.path().join("b.c"), RENAMED).unwrap();
    fs::write(dir.path().join("blob.c"), b"\x00\x01\x02binary").unwrap();
    run(&[dir.path().to_path_buf()], &c_filter(), &options()).unwrap();
}

#[test]
fn run_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(run(&[missing], &c_filter(), &options()).is_err());
}

#[test]
fn run_rejects_zero_k() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.c"), SOURCE).unwrap();
    fs::write(dir.path().join("b.c"), RENAMED).unwrap();
    let opts = CompareOptions { k: 0, ..options() };
    assert!(run(&[dir.path().to_path_buf()], &c_filter(), &opts).is_err());
}

// ── normalize command ────────────────────────────────────────────

#[test]
fn run_normalize_text_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.c");
    fs::write(&path, "int x = 5; // set x\n").unwrap();
    run_normalize(&path, 5, DEFAULT_MAX_FILE_SIZE, false).unwrap();
    run_normalize(&path, 5, DEFAULT_MAX_FILE_SIZE, true).unwrap();
}

#[test]
fn run_normalize_respects_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.c");
    fs::write(&path, "int x = 5;\n").unwrap();
    assert!(run_normalize(&path, 5, 4, false).is_err());
}
