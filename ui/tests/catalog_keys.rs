use std::collections::{BTreeSet, HashSet};

/// Catalog sanity check run against the embedded Fluent source.
///
/// Lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` as a message definition
/// - Skips blank, attribute and continuation lines
const PT_BR: &str = include_str!("../i18n/pt-BR/aulas-ui.ftl");

#[test]
fn catalog_has_no_duplicate_keys() {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for (key, _) in messages(PT_BR) {
        if !seen.insert(key) {
            dups.insert(key);
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in pt-BR:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn every_message_has_a_value() {
    let empty: Vec<&str> = messages(PT_BR)
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect();
    assert!(empty.is_empty(), "Messages without text: {empty:?}");
}

#[test]
fn catalog_is_not_trivially_empty() {
    assert!(messages(PT_BR).len() >= 10);
}

fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| {
            !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
        })
        .collect()
}
