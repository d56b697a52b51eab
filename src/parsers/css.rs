//! Stylesheet inlining
//!
//! Replaces each `<link rel="stylesheet" href="...">` with a `<style>` block
//! holding the referenced file verbatim. Nothing inside the stylesheet is
//! rewritten; `url(...)` and `@import` references are left as they are.

use std::path::Path;

use crate::core::BundleResult;
use crate::session::Session;
use crate::utils::path::resolve_reference_path;

use super::html::utils::{find_attr, is_stylesheet, link_tag_regex, try_replace_all};

/// Inlines every stylesheet link of `html`
///
/// `rel` and `href` may appear in any order among the link's attributes.
/// The whole `<link>` element is replaced; any other attribute on it
/// (`media`, `crossorigin`, ...) is dropped. Every `href` is a local path,
/// so a URL such as `https://...` fails to read like any other missing file.
pub fn inline_stylesheets(
    session: &mut Session,
    html: &str,
    base_dir: &Path,
) -> BundleResult<String> {
    try_replace_all(link_tag_regex(), html, |caps| {
        let tag = &caps[0];

        if !find_attr(tag, "rel").map_or(false, |rel| is_stylesheet(rel.value)) {
            return Ok(None);
        }

        let Some(href) = find_attr(tag, "href").filter(|href| !href.value.is_empty()) else {
            return Ok(None);
        };

        let css_path = resolve_reference_path(base_dir, href.value);
        let css = session.retrieve_text(&css_path)?;

        tracing::debug!(
            href = href.value,
            path = %css_path.display(),
            bytes = css.len(),
            "inlined stylesheet"
        );

        Ok(Some(format!("<style>\n{css}\n</style>")))
    })
}
