//! Filesystem access for resource collections.
//!
//! Ponies and balloons are plain files distinguished by suffix (`.pony`,
//! `.say`, `.think`). This module is the only place that touches the
//! filesystem; the listing code works on the name sequences produced here.
//!
//! An unreadable directory is a configuration error and aborts the listing
//! call; an existing-but-empty directory is handled (silently) by the
//! caller. Quote directories are the exception: they only drive bold
//! highlighting, so a missing one simply contributes no quoters.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use color_print::cformat;
use log::debug;

use crate::styling::{ERROR_EMOJI, HINT_EMOJI};

/// List the entries of `dir` whose file name ends with `suffix`, with the
/// suffix stripped. Order is the directory's iteration order; callers sort
/// where ordering matters.
pub fn names_with_suffix(dir: &Path, suffix: &str) -> anyhow::Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| unreadable_dir(dir, &e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| unreadable_dir(dir, &e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("skipping non-UTF-8 entry in {}", dir.display());
            continue;
        };
        if let Some(stem) = name.strip_suffix(suffix) {
            names.push(stem.to_string());
        }
    }
    debug!(
        "{}: {} entries with suffix {suffix}",
        dir.display(),
        names.len()
    );
    Ok(names)
}

/// Resolve the symlink target of `dir/name + suffix`, if it is a symlink.
///
/// Targets are fully resolved (realpath); a dangling link falls back to the
/// raw link destination so it can still be grouped by basename.
pub fn link_target(dir: &Path, name: &str, suffix: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{name}{suffix}"));
    let meta = std::fs::symlink_metadata(&path).ok()?;
    if !meta.is_symlink() {
        return None;
    }
    std::fs::canonicalize(&path)
        .or_else(|_| std::fs::read_link(&path))
        .ok()
}

/// Collect the set of pony names that have quotes.
///
/// Quote files are named after the ponies they belong to, `+`-separated when
/// shared (`twilight+spike.0.txt`); everything from the first `.` on is
/// ignored. Missing quote directories contribute nothing.
pub fn quoters(quote_dirs: &[PathBuf]) -> HashSet<String> {
    let mut quoters = HashSet::new();
    for dir in quote_dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            debug!("quote dir {} not readable, skipping", dir.display());
            continue;
        };
        for entry in entries.flatten() {
            if let Some(name) = entry.file_name().to_str() {
                let stem = name.split('.').next().unwrap_or(name);
                for pony in stem.split('+').filter(|p| !p.is_empty()) {
                    quoters.insert(pony.to_string());
                }
            }
        }
    }
    quoters
}

fn unreadable_dir(dir: &Path, error: &std::io::Error) -> anyhow::Error {
    anyhow::anyhow!(cformat!(
        "{ERROR_EMOJI} <red>Cannot read resource directory <bold>{}</>: {error}</>\n\n\
         {HINT_EMOJI} <dim>Check the directory paths in your ponyls config</>",
        dir.display()
    ))
}
