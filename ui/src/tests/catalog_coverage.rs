use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the catalog file inside the locale folder.
const FTL_FILENAME: &str = "aulas-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file: any `<identifier> =` line.
/// Comments, terms (`-` prefix) and blank lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal first argument of `t!("...")` under `src/`.
///
/// Dynamically built IDs and direct `fl!` calls are not seen.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(\"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn catalog() -> (BTreeSet<String>, BTreeSet<String>) {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let catalog_file = crate_root
        .join(I18N_DIR)
        .join(crate::i18n::FALLBACK_LANGUAGE)
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&catalog_file).expect("read catalog file");
    let defined = parse_ftl_keys(&content);
    let used = referenced_keys(&crate_root.join("src"));
    (defined, used)
}

#[test]
fn referenced_keys_exist_in_catalog() {
    let (defined, used) = catalog();
    assert!(!defined.is_empty(), "catalog defines no messages");

    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "t! keys missing from the catalog:\n{}",
        missing.join("\n")
    );
}

#[test]
fn catalog_has_no_unused_keys() {
    let (defined, used) = catalog();
    let unused: Vec<_> = defined.difference(&used).cloned().collect();
    assert!(
        unused.is_empty(),
        "catalog keys never looked up with t!:\n{}",
        unused.join("\n")
    );
}
