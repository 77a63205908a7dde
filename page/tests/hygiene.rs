//! Hygiene — budget tests over the workspace's sources
//!
//! Scans the production sources of both workspace crates for antipatterns
//! that violate project standards. Budgets are per crate and only ratchet
//! down: to add a hit you must remove one first. The pure `page` engine
//! tolerates none of them. The `site` view crate carries two fixed
//! allowances for idioms its `hydrate` gating forces: native stubs consume
//! their otherwise-unused arguments with `let _ =` (the class-list and
//! listener installs discard their `Result`s the same way), and `.ok()`
//! flattens storage and clock probes where `Err` and `None` both mean
//! "no browser to ask".

use std::fs;
use std::path::{Path, PathBuf};

/// One scanned pattern and how many hits each crate may carry.
struct Budget {
    pattern: &'static str,
    page_max: usize,
    site_max: usize,
}

// Panics — these crash the page in the visitor's tab.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", page_max: 0, site_max: 0 };
const EXPECT: Budget = Budget { pattern: ".expect(", page_max: 0, site_max: 0 };
const PANIC: Budget = Budget { pattern: "panic!(", page_max: 0, site_max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", page_max: 0, site_max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", page_max: 0, site_max: 0 };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", page_max: 0, site_max: 0 };

// Silent loss — discards errors without inspecting. The `site` numbers are
// exactly the audited hydrate stubs and browser probes under `site/src`.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", page_max: 0, site_max: 9 };
const DOT_OK: Budget = Budget { pattern: ".ok()", page_max: 0, site_max: 4 };

// Structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", page_max: 0, site_max: 0 };

struct SourceFile {
    path: String,
    content: String,
}

/// Both crates' roots, anchored on this crate's manifest dir so the scan
/// does not depend on where the test binary runs from.
fn crate_roots() -> [(&'static str, PathBuf); 2] {
    let page = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let site = page.join("..").join("site");
    [("page", page), ("site", site)]
}

/// Production `.rs` files under one crate's `src/`. The `*_test.rs` side
/// files are exempt: test code may unwrap.
fn production_sources(crate_root: &Path) -> Vec<SourceFile> {
    sources_under(&crate_root.join("src"))
}

fn sources_under(dir: &Path) -> Vec<SourceFile> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            files.extend(sources_under(&path));
        } else if is_production_source(&path) {
            if let Ok(content) = fs::read_to_string(&path) {
                files.push(SourceFile { path: path.display().to_string(), content });
            }
        }
    }
    files
}

fn is_production_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
        && !path.to_string_lossy().ends_with("_test.rs")
}

/// Per-file counts of lines containing `pattern`, files with none omitted.
fn pattern_hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check one budget against both crates.
fn enforce(budget: &Budget) {
    for (name, root) in crate_roots() {
        let max = if name == "page" { budget.page_max } else { budget.site_max };
        let files = production_sources(&root);
        assert!(
            !files.is_empty(),
            "hygiene scan found no sources under {}; the path is broken, not the crate clean",
            root.display()
        );
        let hits = pattern_hits(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, n)| n).sum();
        assert!(
            count <= max,
            "`{}` budget exceeded in `{name}`: found {count}, max {max}.\n{}",
            budget.pattern,
            format_hits(&hits)
        );
    }
}

#[test]
fn unwrap_budget() {
    enforce(&UNWRAP);
}

#[test]
fn expect_budget() {
    enforce(&EXPECT);
}

#[test]
fn panic_budget() {
    enforce(&PANIC);
}

#[test]
fn unreachable_budget() {
    enforce(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    enforce(&TODO);
}

#[test]
fn unimplemented_budget() {
    enforce(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    enforce(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    enforce(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    enforce(&ALLOW_DEAD_CODE);
}
