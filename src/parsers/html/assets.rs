//! Binary asset inlining
//!
//! Icons and images are read as bytes and embedded as base64 `data:` URLs.
//! Only the attribute value changes; the rest of the tag, including the
//! quotes around the value, is kept exactly as written.

use std::path::Path;

use crate::core::{detect_media_type_by_file_name, BundleResult};
use crate::session::Session;
use crate::utils::path::resolve_reference_path;
use crate::utils::url::{create_data_url, is_data_url};

use super::utils::{
    find_attr, img_tag_regex, is_favicon, link_tag_regex, set_attr_value, try_replace_all,
};

/// Loads the file behind `reference` and returns it as a data URL
///
/// The media type comes from the resolved file's extension.
pub fn retrieve_and_embed_asset(
    session: &mut Session,
    base_dir: &Path,
    reference: &str,
) -> BundleResult<String> {
    let asset_path = resolve_reference_path(base_dir, reference);
    let data = session.retrieve_bytes(&asset_path)?;
    let file_name = asset_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let media_type = detect_media_type_by_file_name(&file_name);

    tracing::debug!(
        reference,
        path = %asset_path.display(),
        media_type = media_type.as_str(),
        bytes = data.len(),
        "embedded asset"
    );

    Ok(create_data_url(&media_type, &data))
}

/// Rewrites the `attr_name` value of `tag` to a data URL
///
/// Empty values and values that are already `data:` URLs are left alone,
/// which keeps the pass idempotent. Anything else must be a readable file.
fn embed_tag_attr(
    session: &mut Session,
    base_dir: &Path,
    tag: &str,
    attr_name: &str,
) -> BundleResult<Option<String>> {
    let Some(attr) = find_attr(tag, attr_name).filter(|attr| !attr.value.is_empty()) else {
        return Ok(None);
    };

    if is_data_url(attr.value) {
        return Ok(None);
    }

    let data_url = retrieve_and_embed_asset(session, base_dir, attr.value)?;
    Ok(Some(set_attr_value(tag, &attr, &data_url)))
}

/// Embeds every page icon of `html` as a data URL
///
/// Matches `<link>` tags whose `rel` is `icon` or `shortcut icon`; only the
/// `href` value is rewritten.
pub fn inline_icons(session: &mut Session, html: &str, base_dir: &Path) -> BundleResult<String> {
    try_replace_all(link_tag_regex(), html, |caps| {
        let tag = &caps[0];

        if !find_attr(tag, "rel").map_or(false, |rel| is_favicon(rel.value)) {
            return Ok(None);
        }

        embed_tag_attr(session, base_dir, tag, "href")
    })
}

/// Embeds every `<img>` source of `html` as a data URL
///
/// Only the `src` value is rewritten. `srcset` is not inspected.
pub fn inline_images(session: &mut Session, html: &str, base_dir: &Path) -> BundleResult<String> {
    try_replace_all(img_tag_regex(), html, |caps| {
        embed_tag_attr(session, base_dir, &caps[0], "src")
    })
}
