//! Platform logging initialization for album_app.
//!
//! The terminal belongs to the UI, so logs go to `./album_browser.log` in the
//! current working directory.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub const LOG_FILENAME: &str = "album_browser.log";

/// Install the file logger. Logging is skipped if the file cannot be created.
pub fn initialize(dir: &Path, level: LevelFilter) {
    let log_path = dir.join(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
