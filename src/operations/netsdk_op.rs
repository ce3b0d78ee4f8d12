use crate::client::NetsdkClient;
use crate::settings::VideoEncodeSettings;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::debug;
use std::path::Path;

/// Run the juanctl flag surface in order: connection test, info queries,
/// accumulated encode settings (one PUT), audio toggle, snapshot. Returns
/// false when no flag asked for anything, so the caller can print help.
pub async fn run(client: &NetsdkClient, args: &ArgMatches) -> Result<bool> {
    let mut did_something = false;

    if args.get_flag("test") {
        if client.test_connection().await {
            println!("✓ Connected to {} successfully", client.config().host);
        } else {
            bail!("Failed to connect to {}", client.config().host);
        }
        // The connection test stands alone, like the original tool.
        return Ok(true);
    }

    if args.get_flag("oem") {
        let result = client.oem_info().await.context("Failed to get OEM info")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if args.get_flag("info") {
        let result = client
            .device_info()
            .await
            .context("Failed to get device info")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    let channel = *args.get_one::<u32>("channel").unwrap_or(&101);

    if args.get_flag("video-settings") {
        let result = client
            .video_encode(channel)
            .await
            .context("Failed to get video encode settings")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if args.get_flag("video-options") {
        let result = client
            .video_encode_properties(channel)
            .await
            .context("Failed to get video encode options")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if args.get_flag("audio-settings") {
        let result = client
            .audio_encode(channel)
            .await
            .context("Failed to get audio settings")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if args.get_flag("rtmp") {
        let result = client
            .rtmp_status()
            .await
            .context("Failed to get RTMP configuration")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if args.get_flag("hi3510") {
        let result = client
            .hi3510_venc()
            .await
            .context("Failed to get hi3510 encoder attributes")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    let settings = VideoEncodeSettings {
        codec_type: args.get_one::<String>("set-codec").cloned(),
        h264_profile: args.get_one::<String>("set-profile").cloned(),
        resolution: args.get_one::<String>("set-resolution").cloned(),
        frame_rate: args.get_one::<u32>("set-framerate").copied(),
        constant_bit_rate: args.get_one::<u32>("set-bitrate").copied(),
        bit_rate_control_type: None,
    };

    if !settings.is_empty() {
        println!("Applying settings to channel {}:", channel);
        println!(
            "{}",
            serde_json::to_string_pretty(&settings).unwrap_or_default()
        );
        let result = client
            .set_video_encode(channel, &settings)
            .await
            .context("Failed to apply video encode settings")?;
        // The netsdk dialect reports success in the body, not the status line.
        if result.status_code() == Some(0) {
            println!("✓ Settings applied successfully");
            println!();
            println!("NOTE: RTSP is broken on these cameras. Settings change");
            println!("will not fix video streaming. Use --snapshot for video.");
        } else {
            println!("✗ Failed to apply settings");
            println!("{}", result.pretty());
            bail!("Camera rejected the settings change");
        }
        did_something = true;
    }

    if let Some(enabled) = args.get_one::<bool>("audio-enabled").copied() {
        debug!("Setting audio enabled={} on channel {}", enabled, channel);
        let result = client
            .set_audio_enabled(channel, enabled)
            .await
            .context("Failed to change audio setting")?;
        println!("{}", result.pretty());
        did_something = true;
    }

    if let Some(output) = args.get_one::<String>("snapshot") {
        println!("Downloading snapshot to {}...", output);
        // Snapshot channels are 1-based; encode channels (101/102) do not apply.
        client
            .snapshot(1, Path::new(output))
            .await
            .context("Failed to get snapshot")?;
        println!("✓ Snapshot saved to {}", output);
        did_something = true;
    }

    Ok(did_something)
}
