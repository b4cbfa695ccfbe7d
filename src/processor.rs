//! Rendering of a single resolved template.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::resolver::TemplatePath;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Renders resolved templates against one shared data object.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    data: &'a serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, data: &'a serde_json::Value) -> Self {
        Self { renderer, data }
    }

    /// Reads, renders and writes one template, returning the output path.
    ///
    /// The output file is only touched once rendering has succeeded.
    ///
    /// # Errors
    /// * `Error::TemplateRead` if the template cannot be read
    /// * `Error::Render` if the engine rejects the template
    /// * `Error::Write` if the output cannot be written
    pub fn process(&self, template: &TemplatePath) -> Result<PathBuf> {
        let input = template.input_path();
        let output = template.output_path();

        debug!("Reading template {}", input.display());
        let source = fs::read_to_string(&input).map_err(|source| Error::TemplateRead {
            path: input.clone(),
            source,
        })?;

        let rendered = self
            .renderer
            .render(&source, self.data)
            .map_err(|source| Error::Render {
                path: input.clone(),
                source,
            })?;

        debug!("Writing {} bytes to {}", rendered.len(), output.display());
        fs::write(&output, rendered).map_err(|source| Error::Write {
            template: input,
            output: output.clone(),
            source,
        })?;

        Ok(output)
    }
}
