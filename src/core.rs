use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::env::{EnvConfig, EnvVar};
use crate::parsers::css::inline_stylesheets;
use crate::parsers::html::{inline_icons, inline_images};
use crate::parsers::js::inline_scripts;
use crate::session::Session;

/// Errors that abort a bundling run
///
/// Every variant names the file that caused it. There is no partial output:
/// once any of these is returned, nothing has been written.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The root HTML document does not exist
    #[error("Input HTML not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// A document, stylesheet or script could not be read as UTF-8 text
    #[error("Failed to read {}: {source}", .path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An icon or image could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    ReadBytes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bundled document could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    /// Path of the file this error is about
    pub fn path(&self) -> &Path {
        match self {
            BundleError::InputNotFound { path }
            | BundleError::ReadText { path, .. }
            | BundleError::ReadBytes { path, .. }
            | BundleError::Write { path, .. } => path,
        }
    }
}

pub type BundleResult<T> = Result<T, BundleError>;

/// Configuration options for a bundling run
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct BundleOptions {
    /// Keep every asset read during the run in memory, keyed by resolved path
    pub cache_assets: bool,
}

impl BundleOptions {
    pub fn from_env_config(config: &EnvConfig) -> Self {
        Self {
            cache_assets: config.cache_assets,
        }
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Inlines every local reference of an in-memory HTML document
///
/// Runs the four passes in their fixed order: stylesheets, scripts, icons,
/// images. Text bodies are inlined before any attribute rewriting so that the
/// later passes see the final document. Relative references are resolved
/// against `base_dir`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use single_html::core::{create_single_file_document, BundleOptions};
/// use single_html::session::Session;
///
/// let mut session = Session::new(BundleOptions::default());
/// let html = r#"<link rel="stylesheet" href="style.css">"#;
///
/// let result = create_single_file_document(&mut session, html, Path::new("site"));
/// ```
pub fn create_single_file_document(
    session: &mut Session,
    html: &str,
    base_dir: &Path,
) -> BundleResult<String> {
    let html = inline_stylesheets(session, html, base_dir)?;
    let html = inline_scripts(session, &html, base_dir)?;
    let html = inline_icons(session, &html, base_dir)?;
    inline_images(session, &html, base_dir)
}

/// Bundles `input` into a single self-contained document written to `output`
///
/// Uses the default options. See [`bundle_with_options`].
pub fn bundle(input: &Path, output: &Path) -> BundleResult<()> {
    bundle_with_options(input, output, BundleOptions::default())
}

/// Bundles `input` into a single self-contained document written to `output`
///
/// The output file is created or overwritten only after every reference has
/// been inlined successfully, then a `Bundled to <output>` line is printed.
pub fn bundle_with_options(
    input: &Path,
    output: &Path,
    options: BundleOptions,
) -> BundleResult<()> {
    if !input.exists() {
        return Err(BundleError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let base_dir = input.parent().map(Path::to_path_buf).unwrap_or_default();

    tracing::info!(
        input = %input.display(),
        base_dir = %base_dir.display(),
        "bundling document"
    );

    let mut session = Session::new(options);
    let html = session.retrieve_text(input)?;
    let result = create_single_file_document(&mut session, &html, &base_dir)?;

    fs::write(output, result.as_bytes()).map_err(|source| BundleError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        output = %output.display(),
        bytes = result.len(),
        "bundle written"
    );
    print_info_message(&format!("Bundled to {}", output.display()));

    Ok(())
}

/// Determines the media type based on file extension
pub fn detect_media_type_by_file_name(filename: &str) -> String {
    let filename_lowercased = filename.to_lowercase();

    if filename_lowercased.ends_with(".css") {
        "text/css".to_string()
    } else if filename_lowercased.ends_with(".js") || filename_lowercased.ends_with(".mjs") {
        "application/javascript".to_string()
    } else if filename_lowercased.ends_with(".json") {
        "application/json".to_string()
    } else if filename_lowercased.ends_with(".svg") {
        "image/svg+xml".to_string()
    } else if filename_lowercased.ends_with(".png") {
        "image/png".to_string()
    } else if filename_lowercased.ends_with(".jpg") || filename_lowercased.ends_with(".jpeg") {
        "image/jpeg".to_string()
    } else if filename_lowercased.ends_with(".gif") {
        "image/gif".to_string()
    } else if filename_lowercased.ends_with(".webp") {
        "image/webp".to_string()
    } else if filename_lowercased.ends_with(".avif") {
        "image/avif".to_string()
    } else if filename_lowercased.ends_with(".bmp") {
        "image/bmp".to_string()
    } else if filename_lowercased.ends_with(".ico") {
        "image/x-icon".to_string()
    } else if filename_lowercased.ends_with(".mp3") {
        "audio/mpeg".to_string()
    } else if filename_lowercased.ends_with(".ogg") {
        "audio/ogg".to_string()
    } else if filename_lowercased.ends_with(".wav") {
        "audio/wav".to_string()
    } else if filename_lowercased.ends_with(".mp4") {
        "video/mp4".to_string()
    } else if filename_lowercased.ends_with(".webm") {
        "video/webm".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if crate::env::core::NoColor::get_or_default(false) {
        eprintln!("{msg}");
    } else {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
