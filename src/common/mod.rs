pub mod logging_setup;
pub mod file_utils;
pub mod prompt;
