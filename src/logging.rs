use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Sets up the logger
///
/// # Arguments
///
/// * 'log_path' - path to log file, no file logging if None
/// * 'log_level' - level to log on, e.g. "info"
/// * 'log_to_stdout' - whether to also log to stdout
pub fn setup_logger(log_path: Option<&str>, log_level: &str, log_to_stdout: bool) -> Result<(), ConfigError> {
    let level = LevelFilter::from_str(log_level)?;

    let mut config = Config::builder();
    let mut root = Root::builder();

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)?;
        config = config.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        config = config.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = config.build(root.build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}
