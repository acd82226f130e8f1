//! Hygiene: source-level rules for the engine's production code.
//!
//! Scans `src/` (skipping `_test.rs` siblings) and counts lines matching each
//! pattern. Budgets only ever shrink: the engine runs inside the browser's
//! event loop, where a panic kills the whole canvas and stray prints bypass
//! the host's `tracing` subscriber.

use std::fs;
use std::path::Path;

struct Rule {
    name: &'static str,
    pattern: &'static str,
    budget: usize,
}

const PANICS: &[Rule] = &[
    Rule { name: "unwrap", pattern: ".unwrap()", budget: 0 },
    Rule { name: "expect", pattern: ".expect(", budget: 0 },
    Rule { name: "panic", pattern: "panic!(", budget: 0 },
    Rule { name: "unreachable", pattern: "unreachable!(", budget: 0 },
    Rule { name: "todo", pattern: "todo!(", budget: 0 },
    Rule { name: "unimplemented", pattern: "unimplemented!(", budget: 0 },
    Rule { name: "slice index", pattern: "[0]", budget: 0 },
];

const DISCARDS: &[Rule] = &[
    Rule { name: "let underscore", pattern: "let _ =", budget: 0 },
    Rule { name: "ok()", pattern: ".ok()", budget: 0 },
];

const OUTPUT: &[Rule] = &[
    Rule { name: "println", pattern: "println!(", budget: 0 },
    Rule { name: "eprintln", pattern: "eprintln!(", budget: 0 },
    Rule { name: "dbg", pattern: "dbg!(", budget: 0 },
    Rule { name: "console log", pattern: "console::log", budget: 0 },
];

// input.rs: `Modifiers` mirrors the four DOM modifier flags.
// engine.rs: CSS size times DPR to backing-store pixels.
const LINT_ESCAPES: &[Rule] = &[
    Rule { name: "allow(dead_code)", pattern: "#[allow(dead_code)]", budget: 0 },
    Rule { name: "allow(clippy)", pattern: "#[allow(clippy::", budget: 2 },
    Rule { name: "as u32", pattern: " as u32", budget: 2 },
    Rule { name: "as i32", pattern: " as i32", budget: 0 },
    Rule { name: "as usize", pattern: " as usize", budget: 0 },
];

fn production_sources() -> Vec<(String, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

/// Numbered lines of code, with `//` comments and doc comments stripped.
fn code_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().filter(|(_, line)| !line.trim_start().starts_with("//"))
}

fn violations(sources: &[(String, String)], rules: &[Rule]) -> Vec<String> {
    let mut failures = Vec::new();
    for rule in rules {
        let mut hits = Vec::new();
        for (path, content) in sources {
            for (line_no, line) in code_lines(content) {
                if line.contains(rule.pattern) {
                    hits.push(format!("    {path}:{}: {}", line_no + 1, line.trim()));
                }
            }
        }
        if hits.len() > rule.budget {
            failures.push(format!("{}: found {}, budget {}\n{}", rule.name, hits.len(), rule.budget, hits.join("\n")));
        }
    }
    failures
}

fn assert_within(rules: &[Rule]) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found under src/");
    let failures = violations(&sources, rules);
    assert!(failures.is_empty(), "hygiene budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn no_panicking_calls() {
    assert_within(PANICS);
}

#[test]
fn no_silently_discarded_results() {
    assert_within(DISCARDS);
}

#[test]
fn logging_goes_through_tracing() {
    assert_within(OUTPUT);
}

#[test]
fn lint_escapes_and_casts_stay_budgeted() {
    assert_within(LINT_ESCAPES);
}

#[test]
fn every_module_has_a_test_sibling() {
    let missing: Vec<String> = production_sources()
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !path.ends_with("lib.rs") && !path.ends_with("consts.rs") && !path.ends_with("render.rs"))
        .filter(|path| !Path::new(&path.replace(".rs", "_test.rs")).exists())
        .collect();
    assert!(missing.is_empty(), "modules without a _test.rs sibling: {missing:?}");
}
