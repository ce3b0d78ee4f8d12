use anyhow::{Context, Result};
use camcfg::camera_config::CameraConnectionConfig;
use camcfg::client::ConcordClient;
use camcfg::common::logging_setup;
use camcfg::config_loader::{self, DEFAULT_CONFIG_PATH};
use camcfg::operations::concord_op;
use camcfg::cli;
use log::debug;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Instant::now();
    let matches = cli::build_camctl_cli().get_matches();

    let (config_path, explicit) = match matches.get_one::<String>("config") {
        Some(path) => (path.as_str(), true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    let defaults = config_loader::load_defaults(config_path, explicit)
        .context("Failed to load connection defaults")?;
    logging_setup::initialize_logging(matches.get_flag("debug"), defaults.log_level.as_deref());

    let connection = CameraConnectionConfig::from_cli(&matches, Some(&defaults))?;
    debug!(
        "Connecting to {} as '{}' (timeout {}s)",
        connection.base_url(),
        connection.username,
        connection.timeout_secs
    );

    let Some((command, sub_args)) = matches.subcommand() else {
        cli::build_camctl_cli().print_help()?;
        std::process::exit(1);
    };

    let client = ConcordClient::new(connection).context("Failed to build HTTP client")?;
    concord_op::handle_command(&client, command, sub_args).await?;
    debug!("camctl '{}' finished in {:?}", command, start_time.elapsed());
    Ok(())
}
