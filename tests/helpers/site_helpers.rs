//! Helpers for loading fixture directories.

use std::fs;
use std::path::Path;

use doxyforge::{Site, SiteOptions, load_site};
use tempfile::TempDir;

use super::fixtures::OUTPUT;

/// Write `files` into a fresh temporary directory.
pub fn write_output(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// The full fixture, with `replace` swapped in by file name.
pub fn output_with(replace: &[(&str, &str)]) -> TempDir {
    let files: Vec<(&str, &str)> = OUTPUT
        .iter()
        .map(|&(name, content)| {
            let content = replace
                .iter()
                .find(|(n, _)| *n == name)
                .map_or(content, |(_, c)| *c);
            (name, content)
        })
        .collect();
    write_output(&files)
}

pub fn load(dir: &Path) -> Site {
    load_site(dir, SiteOptions::default()).unwrap()
}

/// Load the unmodified fixture.
pub fn fixture_site() -> Site {
    let dir = write_output(OUTPUT);
    load(dir.path())
}

/// Assert that every needle occurs in `haystack`, in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("Expected {needle:?} after offset {from} in:\n{haystack}"),
        }
    }
}
