//! End-to-end orchestration of a run.
//! Compiles the data object once, then resolves and renders each template
//! in command-line order.

use crate::config::{Config, ErrorPolicy};
use crate::data::{compile_data, process_environment};
use crate::error::{Error, Result};
use crate::processor::Processor;
use crate::renderer::TemplateRenderer;
use crate::resolver::Resolver;
use crate::suffix::SuffixStripper;
use log::{error, info};
use std::path::PathBuf;

/// Outcome of a run that did not abort.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Output files written, in processing order.
    pub rendered: Vec<PathBuf>,
    /// Templates that failed under [`ErrorPolicy::Continue`].
    pub failed: usize,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { config, renderer }
    }

    /// Runs the pipeline against the process environment.
    pub fn run(&self) -> Result<Summary> {
        self.run_with_environment(process_environment())
    }

    /// Runs the pipeline with an explicit set of environment variables.
    ///
    /// # Flow
    /// 1. Compiles the data object; any data error ends the run
    /// 2. Resolves and renders each template in order
    /// 3. Under [`ErrorPolicy::Abort`] the first failure ends the run, under
    ///    [`ErrorPolicy::Continue`] failures are logged and counted
    ///
    /// # Errors
    /// * The first data, path or processing error when aborting
    /// * `Error::Incomplete` when continuing and at least one template failed
    pub fn run_with_environment<I>(&self, environment: I) -> Result<Summary>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = self.config;
        let data = compile_data(
            &config.data_files,
            config.env_field(),
            environment,
            &config.overrides,
        )?;

        let stripper = SuffixStripper::new(&config.suffixes())?;
        let resolver = Resolver::new(stripper, config.output_dir.clone(), config.force);
        let processor = Processor::new(self.renderer, &data);

        let mut summary = Summary::default();
        for argument in &config.templates {
            let outcome = resolver
                .resolve(argument)
                .and_then(|template| processor.process(&template));

            match outcome {
                Ok(output) => {
                    info!("Rendered '{}' to '{}'", argument, output.display());
                    summary.rendered.push(output);
                }
                Err(err) if config.policy == ErrorPolicy::Continue => {
                    error!("{err}");
                    summary.failed += 1;
                }
                Err(err) => return Err(err),
            }
        }

        if summary.failed > 0 {
            return Err(Error::Incomplete {
                failed: summary.failed,
                total: config.templates.len(),
            });
        }

        info!("Rendered {} template(s).", summary.rendered.len());
        Ok(summary)
    }
}
