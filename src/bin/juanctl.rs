use anyhow::{Context, Result};
use camcfg::camera_config::CameraConnectionConfig;
use camcfg::client::NetsdkClient;
use camcfg::common::logging_setup;
use camcfg::config_loader::{self, DEFAULT_CONFIG_PATH};
use camcfg::operations::netsdk_op;
use camcfg::cli;
use log::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build_juanctl_cli().get_matches();

    let (config_path, explicit) = match matches.get_one::<String>("config") {
        Some(path) => (path.as_str(), true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    let defaults = config_loader::load_defaults(config_path, explicit)
        .context("Failed to load connection defaults")?;
    logging_setup::initialize_logging(matches.get_flag("debug"), defaults.log_level.as_deref());

    let connection = CameraConnectionConfig::from_cli(&matches, Some(&defaults))?;
    debug!("Connecting to {} via netsdk API", connection.base_url());

    let client = NetsdkClient::new(connection).context("Failed to build HTTP client")?;
    let did_something = netsdk_op::run(&client, &matches).await?;
    if !did_something {
        cli::build_juanctl_cli().print_help()?;
    }
    Ok(())
}
