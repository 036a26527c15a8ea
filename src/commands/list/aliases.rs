//! Grouping of symlinked pony names into "canonical (aliases...)" labels.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use super::grid::GridItem;
use crate::display::display_width;
use ponyls::styling::Emphasis;

/// Group (name, link target) pairs by canonical name.
///
/// A pair without a target seeds an entry for the name itself; a pair with a
/// target files the name as an alias under the target's basename (resource
/// suffix stripped), creating that entry if absent. Every name ends up in
/// exactly one place: as a key or inside one alias list. Alias lists are
/// sorted ascending.
pub fn group_aliases(
    pairs: &[(String, Option<String>)],
    suffix: &str,
) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for (name, target) in pairs {
        match target.as_deref().filter(|t| !t.is_empty()) {
            None => {
                groups.entry(name.clone()).or_default();
            }
            Some(target) => {
                let canonical = canonical_name(target, suffix);
                groups.entry(canonical).or_default().push(name.clone());
            }
        }
    }

    for aliases in groups.values_mut() {
        aliases.sort();
    }
    groups
}

/// Reduce a link target to the name it points at: basename, suffix stripped.
fn canonical_name(target: &str, suffix: &str) -> String {
    let base = Path::new(target)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(target);
    base.strip_suffix(suffix).unwrap_or(base).to_string()
}

/// Build the grid item for one canonical entry.
///
/// Canonical name and each alias are individually emphasised when they are
/// quoters; aliases render as `" (a b)"`. The sort key is the token-free
/// concatenation so ordering ignores formatting, and the width counts only
/// display text: each name's width, one space per alias, and the two
/// parentheses (aliases only).
pub fn alias_item(
    canonical: &str,
    aliases: &[String],
    quoters: &HashSet<String>,
    emphasis: Emphasis,
) -> GridItem {
    let mut width = display_width(canonical);
    let mut label = emphasis.wrap_if(canonical, quoters.contains(canonical));
    let mut sort_key = canonical.to_string();

    if !aliases.is_empty() {
        width += 2 + aliases.len();
        label.push_str(" (");
        sort_key.push_str(" (");
        for (i, alias) in aliases.iter().enumerate() {
            if i > 0 {
                label.push(' ');
                sort_key.push(' ');
            }
            width += display_width(alias);
            label.push_str(&emphasis.wrap_if(alias, quoters.contains(alias)));
            sort_key.push_str(alias);
        }
        label.push(')');
        sort_key.push(')');
    }

    GridItem::new(sort_key, label, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponyls::styling::BOLD;

    fn pair(name: &str, target: Option<&str>) -> (String, Option<String>) {
        (name.to_string(), target.map(str::to_string))
    }

    #[test]
    fn grouping_is_deterministic_with_sorted_aliases() {
        let pairs = vec![
            pair("a", None),
            pair("c", Some("a.pony")),
            pair("b", Some("a.pony")),
        ];
        let groups = group_aliases(&pairs, ".pony");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["a"], vec!["b", "c"]);
    }

    #[test]
    fn alias_can_precede_its_canonical_entry() {
        let pairs = vec![pair("b", Some("a.pony")), pair("a", None)];
        let groups = group_aliases(&pairs, ".pony");
        assert_eq!(groups["a"], vec!["b"]);
        // "a" was created by the alias, not duplicated by its own pair.
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn target_outside_the_visible_set_still_groups_by_basename() {
        let pairs = vec![pair("twin", Some("/usr/share/ponies/original.pony"))];
        let groups = group_aliases(&pairs, ".pony");
        assert_eq!(groups["original"], vec!["twin"]);
    }

    #[test]
    fn empty_target_counts_as_no_link() {
        let pairs = vec![pair("a", Some(""))];
        let groups = group_aliases(&pairs, ".pony");
        assert!(groups["a"].is_empty());
    }

    #[test]
    fn target_without_suffix_keeps_its_name() {
        let pairs = vec![pair("x", Some("/elsewhere/plain"))];
        let groups = group_aliases(&pairs, ".pony");
        assert!(groups.contains_key("plain"));
    }

    #[test]
    fn label_width_counts_parens_and_alias_spacing() {
        let quoters = HashSet::new();
        let item = alias_item("aj", &["a".to_string(), "b".to_string()], &quoters, BOLD);
        // "aj (a b)": 2 + parens 2 + one space per alias 2 + aliases 2 = 8
        assert_eq!(item.width, 8);
        assert_eq!(item.sort_key, "aj (a b)");
        assert_eq!(item.label, "aj (a b)");
    }

    #[test]
    fn quoters_are_emphasised_individually() {
        let quoters = HashSet::from(["aj".to_string(), "b".to_string()]);
        let item = alias_item("aj", &["a".to_string(), "b".to_string()], &quoters, BOLD);
        assert_eq!(
            item.label,
            "\x1b[1maj\x1b[21m (a \x1b[1mb\x1b[21m)"
        );
        // Emphasis never leaks into ordering or width.
        assert_eq!(item.sort_key, "aj (a b)");
        assert_eq!(item.width, 8);
    }

    #[test]
    fn no_aliases_means_no_parens() {
        let item = alias_item("solo", &[], &HashSet::new(), BOLD);
        assert_eq!(item.sort_key, "solo");
        assert_eq!(item.label, "solo");
        assert_eq!(item.width, 4);
    }
}
