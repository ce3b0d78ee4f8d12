use anyhow::{bail, Context, Result};
use camcfg::camera_config::{self, CameraConnectionConfig};
use camcfg::common::logging_setup;
use camcfg::config_loader::{self, DEFAULT_CONFIG_PATH};
use camcfg::operations::diagnostic_op;
use camcfg::cli;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build_camdiag_cli().get_matches();

    let Some(camera_ip) = matches.get_one::<String>("ip") else {
        bail!("Camera IP address is required.");
    };
    camera_config::validate_ip_format(camera_ip)?;

    let (config_path, explicit) = match matches.get_one::<String>("config") {
        Some(path) => (path.as_str(), true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    let defaults = config_loader::load_defaults(config_path, explicit)
        .context("Failed to load connection defaults")?;
    logging_setup::initialize_logging(matches.get_flag("debug"), defaults.log_level.as_deref());

    let connection = CameraConnectionConfig::from_cli(&matches, Some(&defaults))?;
    let success = diagnostic_op::run_diagnostics(&connection).await?;
    if !success {
        std::process::exit(1);
    }
    Ok(())
}
