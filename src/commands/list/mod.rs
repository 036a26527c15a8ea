//! The listing modes: per-directory grids, alias-annotated grids, the flat
//! one-per-line listing, and the balloon-style grid.
//!
//! Each mode gathers raw names through `ponyls::resources`, optionally runs
//! them through an injected name normalizer, builds grid items, and prints
//! through the auto-detecting styled output. All state is local to one call.

pub mod aliases;
pub mod grid;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::display::{display_width, get_terminal_width};
use aliases::{alias_item, group_aliases};
use grid::{GridItem, columnise};
use ponyls::resources;
use ponyls::styling::{BOLD, println};

/// Resource suffix for pony files.
pub const PONY_SUFFIX: &str = ".pony";
/// Balloon suffixes, selected by think mode.
pub const SAY_SUFFIX: &str = ".say";
pub const THINK_SUFFIX: &str = ".think";

/// Pure name rewrite, e.g. UCS-ising ASCII-approximated names.
pub type Normalizer<'a> = &'a dyn Fn(Vec<String>) -> Vec<String>;

/// Name rewrite that also reports pseudo-link overrides: a rewritten name
/// mapped to the name it should be treated as an alias of, substituting for
/// symlink resolution.
pub type AliasNormalizer<'a> = &'a dyn Fn(Vec<String>) -> (Vec<String>, IndexMap<String, String>);

/// One grid block per directory: bold header, then the columnised names,
/// quoters emphasised. Directories with no ponies are skipped silently.
pub fn simple_list(
    ponydirs: &[PathBuf],
    quoters: &HashSet<String>,
    normalizer: Option<Normalizer>,
) -> anyhow::Result<()> {
    for ponydir in ponydirs {
        let names = resources::names_with_suffix(ponydir, PONY_SUFFIX)?;
        let items = simple_items(names, quoters, normalizer);
        if items.is_empty() {
            continue;
        }

        print_header(ponydir);
        print_grid(columnise(items, get_terminal_width()));
    }
    Ok(())
}

/// Normalize and build one item per name, quoters emphasised.
fn simple_items(
    mut names: Vec<String>,
    quoters: &HashSet<String>,
    normalizer: Option<Normalizer>,
) -> Vec<GridItem> {
    if let Some(normalize) = normalizer {
        names = normalize(names);
    }
    names
        .into_iter()
        .map(|name| {
            let label = BOLD.wrap_if(&name, quoters.contains(&name));
            GridItem::new(name.clone(), label, display_width(&name))
        })
        .collect()
}

/// As `simple_list`, but symlinked ponies are folded into their target's
/// entry and shown as `canonical (aliases...)`.
pub fn alias_list(
    ponydirs: &[PathBuf],
    quoters: &HashSet<String>,
    normalizer: Option<AliasNormalizer>,
) -> anyhow::Result<()> {
    for ponydir in ponydirs {
        let names = resources::names_with_suffix(ponydir, PONY_SUFFIX)?;
        if names.is_empty() {
            continue;
        }
        print_header(ponydir);

        let items = alias_items(ponydir, names, quoters, normalizer);
        print_grid(columnise(items, get_terminal_width()));
    }
    Ok(())
}

/// Normalize, resolve each name's link target, and group into
/// alias-annotated items. Pseudo-link overrides from the normalizer take
/// precedence over actual symlink resolution.
fn alias_items(
    ponydir: &Path,
    mut names: Vec<String>,
    quoters: &HashSet<String>,
    normalizer: Option<AliasNormalizer>,
) -> Vec<GridItem> {
    let mut pseudo_links = IndexMap::new();
    if let Some(normalize) = normalizer {
        (names, pseudo_links) = normalize(names);
    }

    let pairs: Vec<(String, Option<String>)> = names
        .into_iter()
        .map(|name| {
            let target = match pseudo_links.get(&name) {
                Some(target) => Some(format!("{target}{PONY_SUFFIX}")),
                None => resources::link_target(ponydir, &name, PONY_SUFFIX)
                    .map(|path| path.to_string_lossy().into_owned()),
            };
            (name, target)
        })
        .collect();

    group_aliases(&pairs, PONY_SUFFIX)
        .iter()
        .map(|(canonical, aliases)| alias_item(canonical, aliases, quoters, BOLD))
        .collect()
}

/// Flat single-column listing over the standard and (optionally) extra
/// directories: sorted, unformatted, one name per line.
pub fn flat_list(
    standarddirs: &[PathBuf],
    extradirs: Option<&[PathBuf]>,
    normalizer: Option<Normalizer>,
) -> anyhow::Result<()> {
    for name in flat_names(standarddirs, extradirs, normalizer)? {
        println!("{name}");
    }
    Ok(())
}

/// The names `flat_list` prints, in order.
fn flat_names(
    standarddirs: &[PathBuf],
    extradirs: Option<&[PathBuf]>,
    normalizer: Option<Normalizer>,
) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for ponydir in standarddirs {
        names.extend(resources::names_with_suffix(ponydir, PONY_SUFFIX)?);
    }
    for ponydir in extradirs.unwrap_or_default() {
        names.extend(resources::names_with_suffix(ponydir, PONY_SUFFIX)?);
    }
    if let Some(normalize) = normalizer {
        names = normalize(names);
    }
    names.sort();
    Ok(collapse_consecutive(names))
}

/// Suppress consecutive duplicate names only.
///
/// Deliberately not a full dedup: a name recurring after a different one
/// prints again. Longstanding behavior, preserved as-is.
fn collapse_consecutive(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if out.last() != Some(&name) {
            out.push(name);
        }
    }
    out
}

/// Grid of balloon style names across all balloon directories, deduplicated
/// as a set. `isthink` selects `.think` files, otherwise `.say`.
pub fn balloon_list(balloondirs: &[PathBuf], isthink: bool) -> anyhow::Result<()> {
    let suffix = if isthink { THINK_SUFFIX } else { SAY_SUFFIX };

    let mut balloons = IndexSet::new();
    for balloondir in balloondirs {
        balloons.extend(resources::names_with_suffix(balloondir, suffix)?);
    }

    let items = balloons.into_iter().map(GridItem::plain).collect();
    print_grid(columnise(items, get_terminal_width()));
    Ok(())
}

fn print_header(ponydir: &Path) {
    println!("{}", BOLD.wrap(&format!("ponies located in {}", dir_label(ponydir))));
}

/// Header form of a directory path, always ending in the path separator.
fn dir_label(dir: &Path) -> String {
    let mut label = dir.display().to_string();
    if !label.ends_with(std::path::MAIN_SEPARATOR) {
        label.push(std::path::MAIN_SEPARATOR);
    }
    label
}

/// Write the grid followed by the one blank trailing line.
fn print_grid(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
    println!();
}
