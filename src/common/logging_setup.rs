use env_logger::Builder;
use log::LevelFilter;

/// Initialize the logger from the CLI debug flag, then any configured level,
/// then the `info` default.
pub fn initialize_logging(debug_flag: bool, configured_level: Option<&str>) {
    let mut builder = Builder::new();

    let log_level_str = if debug_flag {
        "debug".to_string()
    } else {
        configured_level.unwrap_or("info").to_string()
    };

    match log_level_str.to_lowercase().as_str() {
        "error" => builder.filter_level(LevelFilter::Error),
        "warn" => builder.filter_level(LevelFilter::Warn),
        "info" => builder.filter_level(LevelFilter::Info),
        "debug" => builder.filter_level(LevelFilter::Debug),
        "trace" => builder.filter_level(LevelFilter::Trace),
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            builder.filter_level(LevelFilter::Info)
        }
    };

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}
