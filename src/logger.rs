use crate::config::Verbosity;

pub fn init_logger(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(match verbosity {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Info,
            Verbosity::Verbose => log::LevelFilter::Debug,
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}
