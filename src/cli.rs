use clap::{Arg, ArgAction, Command};

/// CLI for the Concord-dialect tool. Connection flags live on the top-level
/// command; each subcommand maps to a single API call.
pub fn build_camctl_cli() -> Command {
    Command::new("camctl")
        .version("0.1.0")
        .about("Configuration tool for Concord CNC81BA-V4 / Juan Optical 4K POE cameras (digest-auth API).")
        .after_help(
            "Examples:\n  \
             camctl -i 192.168.1.10 info\n  \
             camctl -i 192.168.1.10 set-network --ip 192.168.1.100 --dhcp 0\n  \
             camctl -i 192.168.1.10 set-video --bitrate 4096 --fps 25\n  \
             camctl -i 192.168.1.10 snapshot -o snapshot.jpg\n\n\
             Note: Default credentials are admin with empty password.",
        )
        .arg(
            Arg::new("ip")
                .short('i')
                .long("ip")
                .value_name("ADDR")
                .required(true)
                .help("Camera IP address")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .value_name("USER")
                .help("Username (default: admin)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .value_name("PASS")
                .help("Password (default: empty)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("HTTP port (default: 80)")
                .value_parser(clap::value_parser!(u16))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds (default: 10)")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with default credentials/port/timeout")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("info").about("Get system information"))
        .subcommand(Command::new("network").about("Get network settings"))
        .subcommand(
            Command::new("set-network")
                .about("Set network settings")
                .arg(Arg::new("dhcp").long("dhcp").value_name("0|1").help("Enable DHCP (0 or 1)").value_parser(clap::value_parser!(u8).range(0..=1)).action(ArgAction::Set))
                .arg(Arg::new("ip").long("ip").value_name("ADDR").help("Static IP address").action(ArgAction::Set))
                .arg(Arg::new("netmask").long("netmask").value_name("MASK").help("Network mask").action(ArgAction::Set))
                .arg(Arg::new("gateway").long("gateway").value_name("ADDR").help("Gateway IP").action(ArgAction::Set))
                .arg(Arg::new("dns1").long("dns1").value_name("ADDR").help("Primary DNS").action(ArgAction::Set))
                .arg(Arg::new("dns2").long("dns2").value_name("ADDR").help("Secondary DNS").action(ArgAction::Set)),
        )
        .subcommand(
            Command::new("video")
                .about("Get video stream settings")
                .arg(Arg::new("channel").long("channel").value_name("N").help("Channel (0=main, 1=sub)").value_parser(clap::value_parser!(u32)).default_value("0").action(ArgAction::Set)),
        )
        .subcommand(
            Command::new("set-video")
                .about("Set video stream settings")
                .arg(Arg::new("channel").long("channel").value_name("N").help("Channel (0=main, 1=sub)").value_parser(clap::value_parser!(u32)).default_value("0").action(ArgAction::Set))
                .arg(Arg::new("codec").long("codec").value_name("CODEC").help("Video codec").value_parser(["H264", "H265"]).action(ArgAction::Set))
                .arg(Arg::new("resolution").long("resolution").value_name("WxH").help("Resolution (e.g., 3840x2160)").action(ArgAction::Set))
                .arg(Arg::new("fps").long("fps").value_name("N").help("Frames per second").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("bitrate").long("bitrate").value_name("KBPS").help("Bitrate in kbps").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("quality").long("quality").value_name("PRESET").help("Quality preset").value_parser(["low", "medium", "high"]).action(ArgAction::Set)),
        )
        .subcommand(Command::new("image").about("Get image settings"))
        .subcommand(
            Command::new("set-image")
                .about("Set image settings")
                .arg(Arg::new("brightness").long("brightness").value_name("0-100").help("Brightness (0-100)").value_parser(clap::value_parser!(u8).range(0..=100)).action(ArgAction::Set))
                .arg(Arg::new("contrast").long("contrast").value_name("0-100").help("Contrast (0-100)").value_parser(clap::value_parser!(u8).range(0..=100)).action(ArgAction::Set))
                .arg(Arg::new("saturation").long("saturation").value_name("0-100").help("Saturation (0-100)").value_parser(clap::value_parser!(u8).range(0..=100)).action(ArgAction::Set))
                .arg(Arg::new("sharpness").long("sharpness").value_name("0-100").help("Sharpness (0-100)").value_parser(clap::value_parser!(u8).range(0..=100)).action(ArgAction::Set))
                .arg(Arg::new("wdr").long("wdr").value_name("0|1").help("Wide Dynamic Range (0 or 1)").value_parser(clap::value_parser!(u8).range(0..=1)).action(ArgAction::Set)),
        )
        .subcommand(Command::new("motion").about("Get motion detection settings"))
        .subcommand(
            Command::new("set-motion")
                .about("Set motion detection")
                .arg(Arg::new("enabled").long("enabled").value_name("0|1").help("Enable (0 or 1)").value_parser(clap::value_parser!(u8).range(0..=1)).action(ArgAction::Set))
                .arg(Arg::new("sensitivity").long("sensitivity").value_name("0-100").help("Sensitivity (0-100)").value_parser(clap::value_parser!(u8).range(0..=100)).action(ArgAction::Set)),
        )
        .subcommand(Command::new("osd").about("Get OSD settings"))
        .subcommand(
            Command::new("set-osd")
                .about("Set OSD settings")
                .arg(Arg::new("camera-name").long("camera-name").value_name("TEXT").help("Camera name text").action(ArgAction::Set))
                .arg(Arg::new("show-time").long("show-time").value_name("0|1").help("Show time (0 or 1)").value_parser(clap::value_parser!(u8).range(0..=1)).action(ArgAction::Set))
                .arg(Arg::new("show-name").long("show-name").value_name("0|1").help("Show name (0 or 1)").value_parser(clap::value_parser!(u8).range(0..=1)).action(ArgAction::Set)),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Capture snapshot")
                .arg(Arg::new("channel").long("channel").value_name("N").help("Channel (0=main, 1=sub)").value_parser(clap::value_parser!(u32)).default_value("0").action(ArgAction::Set))
                .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Output filename").default_value("snapshot.jpg").action(ArgAction::Set)),
        )
        .subcommand(
            Command::new("rtsp-url")
                .about("Get RTSP stream URL (known-broken stream, see docs)")
                .arg(Arg::new("channel").long("channel").value_name("N").help("Channel (1=main, 2=sub)").value_parser(clap::value_parser!(u32)).default_value("1").action(ArgAction::Set))
                .arg(Arg::new("no-auth").long("no-auth").help("Exclude credentials from URL").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("reboot").about("Reboot camera"))
        .subcommand(Command::new("reset").about("Factory reset (WARNING: erases all settings!)"))
}

/// CLI for the netsdk-dialect tool. Flag-driven rather than subcommand-driven,
/// matching the surface these cameras are usually scripted against.
pub fn build_juanctl_cli() -> Command {
    Command::new("juanctl")
        .version("0.1.0")
        .about("Configure Juan Optical / Concord cameras via the netsdk API (basic auth).")
        .after_help(
            "Examples:\n  \
             juanctl --ip 192.168.1.33 --info\n  \
             juanctl --ip 192.168.1.33 --set-codec H.264\n  \
             juanctl --ip 192.168.1.33 --snapshot /tmp/camera.jpg\n\n\
             WARNING: These cameras have broken RTSP. Use --snapshot for video.",
        )
        .arg(
            Arg::new("ip")
                .long("ip")
                .value_name("ADDR")
                .required(true)
                .help("Camera IP address")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("username")
                .long("user")
                .value_name("USER")
                .help("Username (default: admin)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .value_name("PASS")
                .help("Password (default: blank)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with default credentials/port/timeout")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("test").long("test").help("Test connection").action(ArgAction::SetTrue))
        .arg(Arg::new("info").long("info").help("Get device info").action(ArgAction::SetTrue))
        .arg(Arg::new("oem").long("oem").help("Get OEM info").action(ArgAction::SetTrue))
        .arg(Arg::new("video-settings").long("video-settings").help("Get video encode settings").action(ArgAction::SetTrue))
        .arg(Arg::new("video-options").long("video-options").help("Get available video options").action(ArgAction::SetTrue))
        .arg(Arg::new("audio-settings").long("audio-settings").help("Get audio settings").action(ArgAction::SetTrue))
        .arg(Arg::new("rtmp").long("rtmp").help("Get RTMP configuration (usually broken)").action(ArgAction::SetTrue))
        .arg(Arg::new("hi3510").long("hi3510").help("Get encoder attributes via hi3510 CGI").action(ArgAction::SetTrue))
        .arg(
            Arg::new("channel")
                .long("channel")
                .value_name("N")
                .help("Channel (101=main, 102=sub)")
                .value_parser(clap::value_parser!(u32))
                .default_value("101")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set-codec")
                .long("set-codec")
                .value_name("CODEC")
                .help("Set video codec")
                .value_parser(["H.264", "H.265", "H.264+", "H.265+"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set-profile")
                .long("set-profile")
                .value_name("PROFILE")
                .help("Set H.264 profile")
                .value_parser(["baseline", "main", "high"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set-resolution")
                .long("set-resolution")
                .value_name("WxH")
                .help("Set resolution (e.g., 1920x1080)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set-framerate")
                .long("set-framerate")
                .value_name("N")
                .help("Set frame rate (5-15)")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("set-bitrate")
                .long("set-bitrate")
                .value_name("KBPS")
                .help("Set bitrate (128-5120 kbps)")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("audio-enabled")
                .long("audio-enabled")
                .value_name("true|false")
                .help("Enable or disable audio on the channel")
                .value_parser(clap::value_parser!(bool))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .value_name("FILE")
                .help("Save snapshot to file")
                .action(ArgAction::Set),
        )
}

/// CLI for the diagnostic tool: a single positional camera IP.
pub fn build_camdiag_cli() -> Command {
    Command::new("camdiag")
        .version("0.1.0")
        .about("Runs connectivity, authentication and settings diagnostics against a Concord camera.")
        .arg(
            Arg::new("ip")
                .value_name("CAMERA_IP")
                .required(true)
                .help("Camera IP address (e.g., 192.168.1.10)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with default credentials/port/timeout")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camctl_parses_set_video() {
        let matches = build_camctl_cli()
            .try_get_matches_from([
                "camctl", "-i", "192.168.1.10", "set-video", "--bitrate", "4096", "--fps", "25",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("ip").unwrap(), "192.168.1.10");
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "set-video");
        assert_eq!(sub.get_one::<u32>("bitrate"), Some(&4096));
        assert_eq!(sub.get_one::<u32>("channel"), Some(&0));
    }

    #[test]
    fn camctl_requires_camera_ip() {
        assert!(build_camctl_cli()
            .try_get_matches_from(["camctl", "info"])
            .is_err());
    }

    #[test]
    fn camctl_rejects_out_of_range_dhcp() {
        assert!(build_camctl_cli()
            .try_get_matches_from(["camctl", "-i", "1.2.3.4", "set-network", "--dhcp", "2"])
            .is_err());
    }

    #[test]
    fn juanctl_accepts_combined_flags() {
        let matches = build_juanctl_cli()
            .try_get_matches_from([
                "juanctl",
                "--ip",
                "192.168.1.33",
                "--set-codec",
                "H.264",
                "--set-bitrate",
                "2048",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("set-codec").map(String::as_str),
            Some("H.264")
        );
        assert_eq!(matches.get_one::<u32>("channel"), Some(&101));
    }

    #[test]
    fn juanctl_rejects_unknown_codec() {
        assert!(build_juanctl_cli()
            .try_get_matches_from(["juanctl", "--ip", "1.2.3.4", "--set-codec", "MJPEG"])
            .is_err());
    }
}
