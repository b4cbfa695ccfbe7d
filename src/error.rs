//! Error handling for hbsbake.
//! Defines the error taxonomy shared by every pipeline stage and the
//! exit codes each failure category maps to.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure raised by a rendering engine.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Handlebars(#[from] handlebars::RenderError),

    #[error(transparent)]
    MiniJinja(#[from] minijinja::Error),
}

/// Broad failure category, used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A data file could not be loaded.
    Data,
    /// A template argument could not be resolved to input and output paths.
    Path,
    /// A template could not be read, rendered or written.
    Processing,
    /// A keep-going run finished with at least one failed template.
    Incomplete,
}

/// Custom error types for hbsbake operations.
///
/// Every variant carries the file it concerns so the diagnostic names both
/// the offending path and the stage that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// A data file is missing or unreadable.
    #[error("Data error: cannot read data file '{}': {source}.", path.display())]
    DataFileRead { path: PathBuf, source: io::Error },

    /// A data file is not valid JSON.
    #[error("Data error: data file '{}' is not valid JSON: {source}.", path.display())]
    DataFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A data file holds valid JSON that is not an object.
    #[error("Data error: data file '{}' must contain a JSON object, found {found}.", path.display())]
    DataFileNotObject { path: PathBuf, found: &'static str },

    #[error("Path error: template path is empty.")]
    EmptyTemplatePath,

    /// The argument ends in a component that cannot be a file name.
    #[error("Path error: '{0}' does not name a template file.")]
    NotAFile(String),

    #[error("Path error: template '{}' does not exist or is not accessible.", path.display())]
    TemplateNotAccessible { path: PathBuf },

    /// Suffix stripping consumed the whole file name.
    #[error("Path error: stripping suffixes from '{}' leaves an empty file name.", path.display())]
    EmptyOutputName { path: PathBuf },

    #[error("Path error: cannot create output directory '{}': {source}.", path.display())]
    OutputDirectory { path: PathBuf, source: io::Error },

    /// Output path equals input path and overwriting was not forced.
    #[error(
        "Path error: rendering '{}' would overwrite the template itself \
         (use --force, --strip or --output-directory).",
        path.display()
    )]
    SelfOverwrite { path: PathBuf },

    #[error("Processing error: cannot read template '{}': {source}.", path.display())]
    TemplateRead { path: PathBuf, source: io::Error },

    #[error("Processing error: cannot render template '{}': {source}.", path.display())]
    Render { path: PathBuf, source: RenderError },

    #[error(
        "Processing error: cannot write '{}' for template '{}': {source}.",
        output.display(),
        template.display()
    )]
    Write {
        template: PathBuf,
        output: PathBuf,
        source: io::Error,
    },

    /// An invalid suffix matcher; suffixes are escaped, so this is not expected in practice.
    #[error("Configuration error: invalid suffix pattern: {0}.")]
    SuffixPattern(#[from] regex::Error),

    #[error("{failed} of {total} templates failed.")]
    Incomplete { failed: usize, total: usize },
}

impl Error {
    /// Returns the failure category of this error.
    pub fn category(&self) -> Category {
        match self {
            Error::DataFileRead { .. }
            | Error::DataFileParse { .. }
            | Error::DataFileNotObject { .. } => Category::Data,
            Error::EmptyTemplatePath
            | Error::NotAFile(_)
            | Error::TemplateNotAccessible { .. }
            | Error::EmptyOutputName { .. }
            | Error::OutputDirectory { .. }
            | Error::SelfOverwrite { .. }
            | Error::SuffixPattern(_) => Category::Path,
            Error::TemplateRead { .. } | Error::Render { .. } | Error::Write { .. } => {
                Category::Processing
            }
            Error::Incomplete { .. } => Category::Incomplete,
        }
    }

    /// Process exit code for this error.
    ///
    /// Codes 1 and 2 are left to usage errors reported by the argument parser.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            Category::Data => 3,
            Category::Path => 4,
            Category::Processing => 5,
            Category::Incomplete => 6,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with the error's category code
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
