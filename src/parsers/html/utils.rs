use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::core::BundleResult;

/// `rel` values that mark a link as the page icon
pub const FAVICON_VALUES: &[&str] = &["icon", "shortcut icon"];

/// Checks whether a `rel` value marks the page icon
pub fn is_favicon(attr_value: &str) -> bool {
    FAVICON_VALUES.contains(&attr_value.trim().to_lowercase().as_str())
}

/// Checks whether a `rel` value marks a stylesheet
pub fn is_stylesheet(attr_value: &str) -> bool {
    attr_value.trim().eq_ignore_ascii_case("stylesheet")
}

/// A quoted attribute found inside a start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAttr<'a> {
    pub value: &'a str,
    /// Byte range of the value within the tag, quotes excluded
    pub value_range: Range<usize>,
}

/// Matches a `<link ...>` start tag
pub fn link_tag_regex() -> &'static Regex {
    static LINK_TAG: OnceLock<Regex> = OnceLock::new();
    LINK_TAG.get_or_init(|| Regex::new(r"(?i)<link\b[^>]*>").expect("valid link tag pattern"))
}

/// Matches an `<img ...>` start tag
pub fn img_tag_regex() -> &'static Regex {
    static IMG_TAG: OnceLock<Regex> = OnceLock::new();
    IMG_TAG.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").expect("valid img tag pattern"))
}

fn attr_regex() -> &'static Regex {
    static ATTR: OnceLock<Regex> = OnceLock::new();
    ATTR.get_or_init(|| {
        Regex::new(r#"\s([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("valid attribute pattern")
    })
}

/// Finds the first quoted attribute called `name` in a start tag
///
/// Names compare case-insensitively. Unquoted values are not recognised.
pub fn find_attr<'a>(tag: &'a str, name: &str) -> Option<TagAttr<'a>> {
    attr_regex().captures_iter(tag).find_map(|caps| {
        if !caps[1].eq_ignore_ascii_case(name) {
            return None;
        }

        caps.get(2).or_else(|| caps.get(3)).map(|value| TagAttr {
            value: value.as_str(),
            value_range: value.range(),
        })
    })
}

/// Returns `tag` with the value of `attr` swapped for `new_value`
///
/// Everything outside the value, quotes included, is kept byte for byte.
pub fn set_attr_value(tag: &str, attr: &TagAttr, new_value: &str) -> String {
    let mut result = String::with_capacity(tag.len() - attr.value_range.len() + new_value.len());
    result.push_str(&tag[..attr.value_range.start]);
    result.push_str(new_value);
    result.push_str(&tag[attr.value_range.end..]);
    result
}

/// Fallible counterpart of `Regex::replace_all`
///
/// Sweeps `haystack` left to right over non-overlapping matches. The
/// replacer returns `Ok(None)` to keep a match as it is. The first error
/// aborts the sweep.
pub fn try_replace_all<F>(re: &Regex, haystack: &str, mut replacer: F) -> BundleResult<String>
where
    F: FnMut(&Captures) -> BundleResult<Option<String>>,
{
    let mut result = String::with_capacity(haystack.len());
    let mut last_match = 0;

    for caps in re.captures_iter(haystack) {
        let whole = caps.get(0).expect("capture group 0 is always present");
        result.push_str(&haystack[last_match..whole.start()]);

        match replacer(&caps)? {
            Some(replacement) => result.push_str(&replacement),
            None => result.push_str(whole.as_str()),
        }

        last_match = whole.end();
    }

    result.push_str(&haystack[last_match..]);
    Ok(result)
}
