pub mod cli;
pub mod config_loader;
pub mod camera_config;
pub mod client;
pub mod settings;
pub mod operations;
pub mod common;
pub mod errors;
