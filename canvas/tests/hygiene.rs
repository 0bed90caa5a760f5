//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the canvas crate source tree for antipatterns that would
//! crash or silently misbehave inside the browser. Each pattern has a budget
//! (ideally zero). The budget never grows: fix an existing hit before adding
//! a new one.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics: these abort the wasm instance.
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "aborts the wasm instance" },
    Budget { pattern: "unreachable!(", max: 0, why: "aborts the wasm instance" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Silent loss: discards errors without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "discards a result" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error" },
    // Output that goes nowhere in the browser.
    Budget { pattern: "println!(", max: 0, why: "stdout is not the console" },
    Budget { pattern: "dbg!(", max: 0, why: "debug leftover" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code should be deleted" },
];

/// Collect production `.rs` files from `canvas/src/`, excluding test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("engine.rs")),
        "hygiene scan found no engine.rs; is the test running from the crate root?"
    );
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = count_in_source(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}.\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}
