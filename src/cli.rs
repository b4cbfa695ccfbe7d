//! Command-line interface implementation for hbsbake.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// Rendering engine selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    /// Handlebars templates (`{{title}}`, `{{#each}}`)
    #[default]
    Handlebars,
    /// Jinja2-style templates (`{{ title }}`, `{% for %}`)
    Minijinja,
}

/// Command-line arguments structure for hbsbake.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "hbsbake: render templates during a build",
    long_about = None
)]
pub struct Args {
    /// Template files to render, processed in the order given
    #[arg(value_name = "TEMPLATE", required = true, num_args = 1..)]
    pub templates: Vec<String>,

    /// JSON file to read data from. Can be repeated; files are merged in order,
    /// with later files overwriting duplicate top-level fields of earlier ones
    #[arg(short, long = "file", value_name = "JSON_FILE")]
    pub files: Vec<PathBuf>,

    /// Add environment variables to the data object under FIELD (default: env)
    #[arg(
        short,
        long,
        value_name = "FIELD",
        num_args = 0..=1,
        require_equals = true
    )]
    pub env: Option<Option<String>>,

    /// Add a string value to the data object; takes precedence over files and
    /// environment. `NAME=` or a bare `NAME` sets the value to null
    #[arg(short, long = "opt", value_name = "NAME=VALUE", value_parser = parse_override)]
    pub opts: Vec<(String, Option<String>)>,

    /// Directory to write output files to. Defaults to each template's own directory
    #[arg(short = 'd', long, value_name = "DIRECTORY")]
    pub output_directory: Option<PathBuf>,

    /// Strip a suffix from output file names, e.g. `.hbs` turns file.html.hbs
    /// into file.html. Accepts a comma-separated list; defaults to `.hbs`
    #[arg(
        short,
        long,
        value_name = "SUFFIX,...",
        num_args = 0..=1,
        require_equals = true
    )]
    pub strip: Option<Option<String>>,

    /// Allow a template to overwrite itself when input and output paths match
    #[arg(long)]
    pub force: bool,

    /// Keep rendering remaining templates after a failure instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Template engine used to render every template
    #[arg(long, value_enum, default_value_t = Engine::Handlebars)]
    pub engine: Engine,

    /// Print extra information about what is being done
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses a `NAME=VALUE` override.
///
/// An empty or missing value yields `None`, which becomes a null in the data object.
pub fn parse_override(raw: &str) -> Result<(String, Option<String>), String> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, value),
        None => (raw, ""),
    };
    if name.trim().is_empty() {
        return Err(format!("missing name in '{raw}', expected NAME=VALUE"));
    }
    let value = (!value.is_empty()).then(|| value.to_string());
    Ok((name.to_string(), value))
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if no template is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Help output is best-effort; the exit code carries the failure.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
