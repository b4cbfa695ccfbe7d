//! Template rendering engines.
//! The pipeline only sees the [`TemplateRenderer`] trait; Handlebars is the
//! default engine and MiniJinja is available for Jinja-style templates.
use crate::cli::Engine;
use crate::error::RenderError;
use handlebars::Handlebars;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given data object.
    ///
    /// # Arguments
    /// * `template` - Template source to render
    /// * `data` - Data object for variable interpolation
    ///
    /// # Returns
    /// * `Result<String, RenderError>` - Rendered output
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;
}

/// Handlebars-based rendering engine.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        HandlebarsRenderer::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    /// # Errors
    /// * `RenderError::Handlebars` on syntax errors, unknown helpers or helper failures
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        Ok(self.registry.render_template(template, data)?)
    }
}

/// MiniJinja-based rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        Ok(self.env.render_str(template, data)?)
    }
}

/// Returns the renderer for the selected engine.
pub fn renderer_for(engine: Engine) -> Box<dyn TemplateRenderer> {
    match engine {
        Engine::Handlebars => Box::new(HandlebarsRenderer::new()),
        Engine::Minijinja => Box::new(MiniJinjaRenderer::new()),
    }
}
