//! hbsbake's main application entry point.
//! Parses the command line, configures logging and hands the run to the pipeline.

use hbsbake::{
    cli::get_args,
    config::Config,
    error::default_error_handler,
    logger::init_logger,
    pipeline::Pipeline,
    renderer::renderer_for,
};

/// Main application entry point.
fn main() {
    let config = Config::from(get_args());
    init_logger(config.verbosity);

    let renderer = renderer_for(config.engine);
    if let Err(err) = Pipeline::new(&config, &*renderer).run() {
        default_error_handler(err);
    }
}
