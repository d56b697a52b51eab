//! # Utilities
//!
//! - `url` - data URL creation, data reference check
//! - `path` - resolving references against the document's directory

pub mod path;
pub mod url;

// Re-export commonly used items for convenience
pub use path::resolve_reference_path;
pub use url::{create_data_url, is_data_url};
