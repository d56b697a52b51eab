//! # single-html
//!
//! Bundles a small static HTML application into one self-contained HTML file
//! by inlining its stylesheets, scripts, icons and images.
//!
//! ## Modules
//!
//! - `core` - bundling entry points, errors and options
//! - `env` - typed environment variable configuration
//! - `parsers` - the four reference-rewriting passes
//! - `session` - asset loading with an optional per-run cache
//! - `utils` - path resolution and data URL helpers

pub mod core;
pub mod env;
pub mod parsers;
pub mod session;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::parsers::*;
pub use crate::session::Session;
pub use crate::utils::*;
