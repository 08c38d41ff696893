//! Architectural Enforcement Tests
//!
//! Structural rules for the spnoiser TUI crate:
//! - Screen elements never talk to crossterm; they only see a `Surface`
//! - No `std::thread::sleep` in production code (the tick loop sleeps on tokio)
//! - No `.unwrap()` / `.expect(` in production code
//!
//! Test modules (everything from `#[cfg(test)]` on) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Root of the TUI crate sources
pub fn tui_src() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tui/src")
        .canonicalize()
        .unwrap_or_else(|_| PathBuf::from("../../tui/src"))
}

/// All `.rs` files under `dir`
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
        .collect()
}

/// Source text before the first `#[cfg(test)]`
pub fn production_source(path: &Path) -> String {
    let source = fs::read_to_string(path).unwrap_or_default();
    match source.find("#[cfg(test)]") {
        Some(idx) => source[..idx].to_string(),
        None => source,
    }
}

/// `(file, line number, line)` for every production line containing `needle`
pub fn find_violations(dir: &Path, needle: &str) -> Vec<(PathBuf, usize, String)> {
    let mut hits = Vec::new();
    for path in rust_files(dir) {
        for (idx, line) in production_source(&path).lines().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            if code.contains(needle) {
                hits.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
    hits
}

fn report(hits: &[(PathBuf, usize, String)]) -> String {
    hits.iter()
        .map(|(path, line, text)| format!("{}:{}: {}", path.display(), line, text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_found() {
        let files = rust_files(&tui_src());
        assert!(
            files.iter().any(|p| p.ends_with("app.rs")),
            "tui sources not found under {:?}",
            tui_src()
        );
    }

    #[test]
    fn test_elements_do_not_touch_crossterm() {
        let src = tui_src();
        for module in ["widgets", "compositor", "geometry.rs"] {
            let hits = find_violations(&src.join(module), "crossterm");
            assert!(hits.is_empty(), "elements must draw through Surface:\n{}", report(&hits));
        }
    }

    #[test]
    fn test_no_thread_sleep_in_production_code() {
        let hits = find_violations(&tui_src(), "thread::sleep");
        assert!(hits.is_empty(), "use tokio::time::sleep:\n{}", report(&hits));
    }

    #[test]
    fn test_no_unwrap_in_production_code() {
        let mut hits = find_violations(&tui_src(), ".unwrap()");
        hits.extend(find_violations(&tui_src(), ".expect("));
        assert!(hits.is_empty(), "propagate errors instead:\n{}", report(&hits));
    }
}
