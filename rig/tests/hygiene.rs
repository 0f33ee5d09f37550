//! Source hygiene for the rig library.
//!
//! Scans the production sources under `src/` (sibling `_test.rs` files are
//! exempt) and fails when a banned construct shows up more often than its
//! budget allows. Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    /// Substring matched per line.
    pattern: &'static str,
    /// Lines matching this are not counted against the budget.
    unless: Option<&'static str>,
    max: usize,
    hint: &'static str,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", unless: None, max: 0, hint: "propagate with `?`" };
const EXPECT: Budget = Budget { pattern: ".expect(", unless: None, max: 0, hint: "propagate with `?`" };
const PANIC: Budget = Budget { pattern: "panic!(", unless: None, max: 0, hint: "return an error" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", unless: None, max: 0, hint: "make the state unrepresentable" };
const TODO: Budget = Budget { pattern: "todo!(", unless: None, max: 0, hint: "finish it" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", unless: None, max: 0, hint: "finish it" };

// Errors dropped on the floor.
const LET_UNDERSCORE: Budget = Budget { pattern: "let _ =", unless: None, max: 0, hint: "handle or log the result" };
const DOT_OK: Budget = Budget { pattern: ".ok()", unless: None, max: 0, hint: "handle or log the error" };

// Structure and diagnostics.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", unless: None, max: 0, hint: "delete it" };
const PRINTLN: Budget = Budget { pattern: "println!(", unless: Some("eprintln!("), max: 0, hint: "log with tracing" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", unless: None, max: 0, hint: "log with tracing" };

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with("_test.rs"));
        if is_rs && !is_test {
            if let Ok(text) = fs::read_to_string(&path) {
                out.push((path, text));
            }
        }
    }
}

fn check(budget: &Budget) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found under src/");

    let hits: Vec<(String, usize)> = sources
        .iter()
        .map(|(path, text)| {
            let count = text
                .lines()
                .filter(|line| line.contains(budget.pattern))
                .filter(|line| budget.unless.is_none_or(|skip| !line.contains(skip)))
                .count();
            (path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    let found: usize = hits.iter().map(|(_, count)| count).sum();
    let listing = hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n");
    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.hint,
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn let_underscore_budget() {
    check(&LET_UNDERSCORE);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}

#[test]
fn eprintln_budget() {
    check(&EPRINTLN);
}
