//! # Parsers
//!
//! The reference-rewriting passes, one per kind of external resource:
//!
//! - `css` - `<link rel="stylesheet">` to `<style>` blocks
//! - `js` - `<script src>` to inline `<script>` blocks
//! - `html` - icon and image references to data URLs, plus the tag scanning
//!   helpers the other passes share

pub mod css;
pub mod html;
pub mod js;

// Re-export commonly used items for convenience
pub use css::inline_stylesheets;
pub use html::{inline_icons, inline_images};
pub use js::inline_scripts;
