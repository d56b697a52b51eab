//! HTML tag scanning and binary asset embedding
//!
//! - `utils`: tag and attribute matching shared by every pass
//! - `assets`: icon and image embedding as data URLs

pub mod assets;
pub mod utils;

pub use assets::{inline_icons, inline_images, retrieve_and_embed_asset};
pub use utils::{find_attr, is_favicon, is_stylesheet, set_attr_value, TagAttr, FAVICON_VALUES};
