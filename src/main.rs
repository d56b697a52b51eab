use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::Parser;
use tracing::Level;

use single_html::core::{bundle_with_options, print_error_message, BundleOptions};
use single_html::env::{generate_env_docs, EnvConfig};

#[derive(Parser, Debug)]
#[command(
    name = "single-html",
    version,
    about = "Bundle an HTML app into a single self-contained HTML file",
    after_help = generate_env_docs()
)]
struct Cli {
    /// Path to the root HTML document
    #[arg(long, default_value = "index.html")]
    input: PathBuf,

    /// Path of the bundled HTML document to write
    #[arg(long, default_value = "single.html")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            print_error_message(&error.to_string());
            process::exit(1);
        }
    };

    init_logging(&config);

    let (input, output) = match (absolute_path(&cli.input), absolute_path(&cli.output)) {
        (Ok(input), Ok(output)) => (input, output),
        (Err(error), _) | (_, Err(error)) => {
            print_error_message(&format!("Unable to determine current directory: {error}"));
            process::exit(1);
        }
    };

    let options = BundleOptions::from_env_config(&config);
    if let Err(error) = bundle_with_options(&input, &output, options) {
        print_error_message(&error.to_string());
        process::exit(1);
    }
}

fn init_logging(config: &EnvConfig) {
    let level = Level::from_str(&config.log_level).unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!config.no_color)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
