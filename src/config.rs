//! Run configuration for hbsbake.
//! Parsed arguments are resolved once into an immutable [`Config`] that every
//! pipeline stage reads from.

use crate::cli::{Args, Engine};
use crate::constants::{DEFAULT_ENV_FIELD, DEFAULT_SUFFIX, SUFFIX_SEPARATOR};
use indexmap::IndexMap;
use std::path::PathBuf;

/// An option that can be absent, given as a bare flag, or given with a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    Disabled,
    /// Flag given without a value.
    Default,
    /// Flag given with an explicit value.
    Explicit(String),
}

impl From<Option<Option<String>>> for Toggle {
    fn from(value: Option<Option<String>>) -> Self {
        match value {
            None => Toggle::Disabled,
            Some(None) => Toggle::Default,
            Some(Some(value)) => Toggle::Explicit(value),
        }
    }
}

/// What to do when a single template fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run at the first failure.
    #[default]
    Abort,
    /// Report the failure and carry on with the next template.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Template path arguments, in command-line order.
    pub templates: Vec<String>,
    /// JSON data files, merged left to right.
    pub data_files: Vec<PathBuf>,
    /// Environment injection.
    pub env: Toggle,
    /// Top-level overrides; `None` sets a null.
    pub overrides: IndexMap<String, Option<String>>,
    pub output_dir: Option<PathBuf>,
    /// Suffix stripping.
    pub strip: Toggle,
    pub force: bool,
    pub policy: ErrorPolicy,
    pub engine: Engine,
    pub verbosity: Verbosity,
}

impl Config {
    /// Field the environment is merged into, if environment injection is on.
    pub fn env_field(&self) -> Option<&str> {
        match &self.env {
            Toggle::Disabled => None,
            Toggle::Default => Some(DEFAULT_ENV_FIELD),
            Toggle::Explicit(field) => Some(field.as_str()),
        }
    }

    /// Suffixes to strip from output file names; empty disables stripping.
    pub fn suffixes(&self) -> Vec<String> {
        match &self.strip {
            Toggle::Disabled => Vec::new(),
            Toggle::Default => vec![DEFAULT_SUFFIX.to_string()],
            Toggle::Explicit(list) => list
                .split(SUFFIX_SEPARATOR)
                .map(str::trim)
                .filter(|suffix| !suffix.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let verbosity = if args.quiet {
            Verbosity::Quiet
        } else if args.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            templates: args.templates,
            data_files: args.files,
            env: args.env.into(),
            overrides: args.opts.into_iter().collect(),
            output_dir: args.output_directory,
            strip: args.strip.into(),
            force: args.force,
            policy: if args.keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::Abort
            },
            engine: args.engine,
            verbosity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_flag_shapes() {
        assert_eq!(Toggle::from(None::<Option<String>>), Toggle::Disabled);
        assert_eq!(Toggle::from(Some(None)), Toggle::Default);
        assert_eq!(
            Toggle::from(Some(Some("vars".to_string()))),
            Toggle::Explicit("vars".to_string())
        );
    }

    #[test]
    fn test_env_field() {
        let mut config = Config::default();
        assert_eq!(config.env_field(), None);

        config.env = Toggle::Default;
        assert_eq!(config.env_field(), Some("env"));

        config.env = Toggle::Explicit("vars".to_string());
        assert_eq!(config.env_field(), Some("vars"));
    }

    #[test]
    fn test_suffixes() {
        let mut config = Config::default();
        assert!(config.suffixes().is_empty());

        config.strip = Toggle::Default;
        assert_eq!(config.suffixes(), vec![".hbs"]);

        config.strip = Toggle::Explicit(".hbs, .tpl,,".to_string());
        assert_eq!(config.suffixes(), vec![".hbs", ".tpl"]);

        config.strip = Toggle::Explicit(",".to_string());
        assert!(config.suffixes().is_empty());
    }
}
