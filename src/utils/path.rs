use std::path::{Path, PathBuf};

/// Resolves a `src`/`href` value against the document's directory
///
/// The direct join wins when it names an existing file. Otherwise one
/// literal leading `./` is stripped and the join retried. Nothing else is
/// rewritten: `../`, absolute paths and query strings pass through as-is, and
/// a path that still does not exist is returned so the caller's read fails.
pub fn resolve_reference_path(base_dir: &Path, reference: &str) -> PathBuf {
    let direct = base_dir.join(reference);
    if direct.is_file() {
        return direct;
    }

    match reference.strip_prefix("./") {
        Some(stripped) => base_dir.join(stripped),
        None => direct,
    }
}
