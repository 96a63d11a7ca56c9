//! Hygiene: enforces coding standards at test time
//!
//! Scans the slider crate's production sources for patterns that crash the
//! page or swallow errors. Each pattern has a budget of zero; test files
//! (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that `pattern` appears on at most `max` lines across the crate.
fn enforce(pattern: &str, max: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty());
}

#[test]
fn unwrap_budget() {
    enforce(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    enforce(".expect(", 0);
}

#[test]
fn panic_budget() {
    enforce("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    enforce("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    enforce("todo!(", 0);
}

#[test]
fn silent_discard_budget() {
    enforce("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    enforce(".ok()", 0);
}

#[test]
fn println_budget() {
    enforce("println!(", 0);
}

#[test]
fn allow_dead_code_budget() {
    enforce("#[allow(dead_code)]", 0);
}
