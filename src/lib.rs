//! hbsbake is a build-time template renderer.
//! It merges data from JSON files, the environment and command-line options
//! into one object and renders each template next to itself or into an
//! output directory, optionally stripping suffixes such as `.hbs`.

/// Command-line interface module
pub mod cli;

/// Immutable run configuration built from parsed arguments
pub mod config;

/// Common constants
pub mod constants;

/// Data object compilation from files, environment and overrides
pub mod data;

/// Error types and exit codes
pub mod error;

pub mod logger;

/// Run orchestration
pub mod pipeline;

/// Single template rendering
pub mod processor;

/// Rendering engines behind a common trait
pub mod renderer;

/// Input and output path resolution with self-overwrite protection
pub mod resolver;

/// Output file name suffix stripping
pub mod suffix;
