//! Script inlining
//!
//! Replaces each external `<script src="..."></script>` with a bare
//! `<script>` block holding the referenced source verbatim.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::BundleResult;
use crate::session::Session;
use crate::utils::path::resolve_reference_path;

use super::html::utils::{find_attr, try_replace_all};

/// Matches a script element whose body is empty or whitespace only
fn external_script_regex() -> &'static Regex {
    static EXTERNAL_SCRIPT: OnceLock<Regex> = OnceLock::new();
    EXTERNAL_SCRIPT.get_or_init(|| {
        Regex::new(r"(?i)<script\b[^>]*>\s*</script>").expect("valid script pattern")
    })
}

/// Inlines every external script of `html`
///
/// The replacement tag carries no attributes: `type="module"`, `defer`,
/// `async` and the rest are discarded with the `src`. Scripts that already
/// have a body are never touched.
pub fn inline_scripts(session: &mut Session, html: &str, base_dir: &Path) -> BundleResult<String> {
    try_replace_all(external_script_regex(), html, |caps| {
        let element = &caps[0];
        let start_tag_end = element.find('>').map_or(element.len(), |i| i + 1);
        let start_tag = &element[..start_tag_end];

        let Some(src) = find_attr(start_tag, "src").filter(|src| !src.value.is_empty()) else {
            return Ok(None);
        };

        let js_path = resolve_reference_path(base_dir, src.value);
        let js = session.retrieve_text(&js_path)?;

        tracing::debug!(
            src = src.value,
            path = %js_path.display(),
            bytes = js.len(),
            "inlined script"
        );

        Ok(Some(format!("<script>\n{js}\n</script>")))
    })
}
