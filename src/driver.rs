use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{classifier::ShadowPolicy, error::Result, masker};

/// Collects the regular files of `dir` whose name ends with ".png"
/// (exact, case-sensitive suffix). Subdirectories and other entries are
/// skipped, never recursed into.
///
/// `sorted` switches between raw `read_dir` order and lexicographic
/// order. The aggregate result is the same either way; only the order of
/// the progress lines changes.
pub fn png_entries(dir: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(".png") {
            paths.push(entry.path());
        }
    }

    if sorted {
        paths = paths.into_iter().sorted().collect();
    }

    Ok(paths)
}

/// Masks every PNG in `dir` one at a time, printing a progress line per
/// file, and returns the total changed pixel count.
///
/// The first failing file aborts the run; files after it are left
/// untouched.
pub fn run_directory(dir: &Path, policy: ShadowPolicy, sorted: bool) -> Result<u64> {
    let mut total: u64 = 0;

    for path in png_entries(dir, sorted)? {
        let name = path
            .file_name()
            .map_or(Cow::Borrowed(""), |n| n.to_string_lossy());
        println!("Processing: {}", name);

        let changed = masker::mask_file(&path, policy)?;
        println!("  Removed {} teal pixels", changed);

        total += changed;
    }

    Ok(total)
}
