use crate::client::ConcordClient;
use crate::common::prompt;
use crate::settings::{
    ImageSettings, MotionSettings, NetworkSettings, OsdSettings, VideoStreamSettings,
};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use std::path::Path;

/// Dispatch a camctl subcommand to the matching client call and print the
/// result. Each command is a single request; errors bubble up to main, which
/// prints them to stderr and exits non-zero.
pub async fn handle_command(
    client: &ConcordClient,
    command: &str,
    args: &ArgMatches,
) -> Result<()> {
    debug!("🎬 Dispatching camctl subcommand: {}", command);
    match command {
        "info" => {
            let result = client.system_info().await.context("Failed to get system info")?;
            println!("{}", result.pretty());
        }
        "network" => {
            let result = client
                .network_settings()
                .await
                .context("Failed to get network settings")?;
            println!("{}", result.pretty());
        }
        "set-network" => {
            let settings = NetworkSettings {
                dhcp: args.get_one::<u8>("dhcp").copied(),
                ip: args.get_one::<String>("ip").cloned(),
                netmask: args.get_one::<String>("netmask").cloned(),
                gateway: args.get_one::<String>("gateway").cloned(),
                dns1: args.get_one::<String>("dns1").cloned(),
                dns2: args.get_one::<String>("dns2").cloned(),
            };
            let result = client
                .set_network_settings(&settings)
                .await
                .context("Failed to set network settings")?;
            println!("{}", result.pretty());
        }
        "video" => {
            let channel = *args.get_one::<u32>("channel").unwrap_or(&0);
            let result = client
                .video_stream_settings(channel)
                .await
                .context("Failed to get video stream settings")?;
            println!("{}", result.pretty());
        }
        "set-video" => {
            let mut settings =
                VideoStreamSettings::for_channel(*args.get_one::<u32>("channel").unwrap_or(&0));
            settings.codec = args.get_one::<String>("codec").cloned();
            settings.resolution = args.get_one::<String>("resolution").cloned();
            settings.fps = args.get_one::<u32>("fps").copied();
            settings.bitrate = args.get_one::<u32>("bitrate").copied();
            settings.quality = args.get_one::<String>("quality").cloned();
            let result = client
                .set_video_stream_settings(&settings)
                .await
                .context("Failed to set video stream settings")?;
            println!("{}", result.pretty());
        }
        "image" => {
            let result = client
                .image_settings()
                .await
                .context("Failed to get image settings")?;
            println!("{}", result.pretty());
        }
        "set-image" => {
            let settings = ImageSettings {
                brightness: args.get_one::<u8>("brightness").copied(),
                contrast: args.get_one::<u8>("contrast").copied(),
                saturation: args.get_one::<u8>("saturation").copied(),
                sharpness: args.get_one::<u8>("sharpness").copied(),
                wdr: args.get_one::<u8>("wdr").copied(),
                ..Default::default()
            };
            let result = client
                .set_image_settings(&settings)
                .await
                .context("Failed to set image settings")?;
            println!("{}", result.pretty());
        }
        "motion" => {
            let result = client
                .motion_detection()
                .await
                .context("Failed to get motion detection settings")?;
            println!("{}", result.pretty());
        }
        "set-motion" => {
            let settings = MotionSettings {
                enabled: args.get_one::<u8>("enabled").copied(),
                sensitivity: args.get_one::<u8>("sensitivity").copied(),
                regions: None,
            };
            let result = client
                .set_motion_detection(&settings)
                .await
                .context("Failed to set motion detection")?;
            println!("{}", result.pretty());
        }
        "osd" => {
            let result = client
                .osd_settings()
                .await
                .context("Failed to get OSD settings")?;
            println!("{}", result.pretty());
        }
        "set-osd" => {
            let settings = OsdSettings {
                camera_name: args.get_one::<String>("camera-name").cloned(),
                time_enabled: args.get_one::<u8>("show-time").copied(),
                camera_name_enabled: args.get_one::<u8>("show-name").copied(),
                ..Default::default()
            };
            let result = client
                .set_osd_settings(&settings)
                .await
                .context("Failed to set OSD settings")?;
            println!("{}", result.pretty());
        }
        "snapshot" => {
            let channel = *args.get_one::<u32>("channel").unwrap_or(&0);
            let output = args
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("snapshot.jpg");
            println!("Capturing snapshot from channel {}...", channel);
            client
                .snapshot(channel, Some(Path::new(output)))
                .await
                .context("Failed to capture snapshot")?;
            println!("Snapshot saved to {}", output);
        }
        "rtsp-url" => {
            let channel = *args.get_one::<u32>("channel").unwrap_or(&1);
            let with_auth = !args.get_flag("no-auth");
            println!("{}", client.rtsp_url(channel, with_auth));
            println!();
            println!("WARNING: This camera has broken RTSP implementation!");
            println!("The stream is missing SPS/PPS headers. See RTSP_ISSUE.md for details.");
        }
        "reboot" => {
            if prompt::confirm(
                "Are you sure you want to reboot the camera? (yes/no): ",
                "yes",
                true,
            ) {
                let result = client.reboot().await.context("Failed to reboot camera")?;
                info!("Reboot request sent to {}", client.config().host);
                println!("{}", result.pretty());
            } else {
                println!("Reboot cancelled");
            }
        }
        "reset" => {
            println!(
                "WARNING: This will erase ALL camera settings and return to factory defaults!"
            );
            if prompt::confirm("Type 'FACTORY RESET' to confirm: ", "FACTORY RESET", false) {
                let result = client
                    .factory_reset()
                    .await
                    .context("Failed to factory reset camera")?;
                info!("Factory reset request sent to {}", client.config().host);
                println!("{}", result.pretty());
            } else {
                println!("Factory reset cancelled");
            }
        }
        other => bail!("Subcommand '{}' not implemented.", other),
    }
    Ok(())
}
