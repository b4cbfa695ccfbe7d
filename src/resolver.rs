//! Template path resolution.
//! Turns a template argument into input and output locations, and refuses
//! to let a template overwrite itself unless asked to.

use crate::error::{Error, Result};
use crate::suffix::SuffixStripper;
use log::{debug, warn};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Where one template is read from and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePath {
    pub input_dir: PathBuf,
    pub input_name: String,
    pub output_dir: PathBuf,
    pub output_name: String,
}

impl TemplatePath {
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}

/// Settings shared by every template of a run.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    stripper: SuffixStripper,
    output_dir: Option<PathBuf>,
    force: bool,
}

/// Splits a template argument into its directory and file name.
///
/// A bare file name lives in the current directory.
pub fn split_template_path(argument: &str) -> Result<(PathBuf, String)> {
    if argument.trim().is_empty() {
        return Err(Error::EmptyTemplatePath);
    }

    let path = Path::new(argument);
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::NotAFile(argument.to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, name.to_string()))
}

/// Checks that `path` is a regular file that can be opened for reading.
fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// Ensures the output directory exists.
///
/// # Errors
/// * `Error::OutputDirectory` if the directory cannot be created
pub fn ensure_output_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| Error::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Compares two directories, resolving `.` and symlinks when both exist.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

impl Resolver {
    pub fn new(stripper: SuffixStripper, output_dir: Option<PathBuf>, force: bool) -> Self {
        Self {
            stripper,
            output_dir,
            force,
        }
    }

    /// Resolves one template argument.
    ///
    /// # Errors
    /// * `Error::EmptyTemplatePath` for an empty or blank argument
    /// * `Error::NotAFile` if the argument has no file name component
    /// * `Error::TemplateNotAccessible` if the template cannot be read
    /// * `Error::EmptyOutputName` if stripping removes the whole name
    /// * `Error::OutputDirectory` if the output directory cannot be created
    /// * `Error::SelfOverwrite` if the output would replace the template and force is off
    pub fn resolve(&self, argument: &str) -> Result<TemplatePath> {
        let (input_dir, input_name) = split_template_path(argument)?;
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| input_dir.clone());
        let output_name = self.stripper.strip(&input_name).to_string();

        let template = TemplatePath {
            input_dir,
            input_name,
            output_dir,
            output_name,
        };
        debug!(
            "Resolved '{}' to '{}'",
            argument,
            template.output_path().display()
        );

        let input_path = template.input_path();
        if !is_readable_file(&input_path) {
            return Err(Error::TemplateNotAccessible { path: input_path });
        }
        if template.output_name.is_empty() {
            return Err(Error::EmptyOutputName { path: input_path });
        }

        ensure_output_dir(&template.output_dir)?;

        if template.output_name == template.input_name
            && same_directory(&template.output_dir, &template.input_dir)
        {
            if !self.force {
                return Err(Error::SelfOverwrite { path: input_path });
            }
            warn!("Overwriting template '{}' with its own output", input_path.display());
        }

        Ok(template)
    }
}
