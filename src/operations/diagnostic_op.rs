use crate::camera_config::CameraConnectionConfig;
use crate::client::{ApiResponse, ConcordClient};
use anyhow::Result;
use chrono::Local;
use log::debug;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;

const TCP_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

struct DiagnosticResult {
    test_name: String,
    success: bool,
    details: String,
}

/// Render one response field for the report, or a marker when it is absent.
fn field_display(resp: &ApiResponse, path: &[&str]) -> String {
    match resp.field(path) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<missing>".to_string(),
    }
}

fn field_enabled(resp: &ApiResponse, path: &[&str]) -> bool {
    match resp.field(path) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    }
}

async fn probe_tcp(host: &str, port: u16) -> bool {
    let addr = format!("{}:{}", host, port);
    debug!("Probing TCP {}", addr);
    matches!(
        timeout(TCP_PROBE_TIMEOUT, TcpStream::connect(addr.as_str())).await,
        Ok(Ok(_))
    )
}

/// Run the full diagnostic sequence against a Concord-dialect camera:
/// reachability, authentication, then every settings group, a snapshot test
/// and a summary. Up to a dozen sequential requests, nothing in parallel.
/// Returns false when a fatal check (port 80, authentication) fails.
pub async fn run_diagnostics(config: &CameraConnectionConfig) -> Result<bool> {
    let suite_start = Instant::now();
    let mut results: Vec<DiagnosticResult> = Vec::new();

    println!("Diagnosing camera at {}", config.host);
    println!("Started at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(60));

    // 1. HTTP port reachability (fatal)
    println!("\n1. Network Connectivity");
    if probe_tcp(&config.host, config.port).await {
        println!("✓ Port {} reachable", config.port);
    } else {
        println!("✗ Cannot connect to port {}", config.port);
        return Ok(false);
    }

    // 2. RTSP port (warning only; the stream is broken anyway)
    println!("\n2. RTSP Port");
    if probe_tcp(&config.host, 554).await {
        println!("✓ Port 554 (RTSP) reachable");
    } else {
        println!("⚠ Port 554 (RTSP) not reachable");
    }

    // 3. Authentication (fatal)
    println!("\n3. Authentication");
    let client = ConcordClient::new(config.clone())?;
    let info = match client.system_info().await {
        Ok(info) => {
            println!("✓ Authentication successful");
            info
        }
        Err(e) => {
            println!("✗ Authentication failed: {}", e);
            println!("\nTroubleshooting tips:");
            println!("- Verify camera IP address");
            println!("- Try default credentials: admin / (empty)");
            println!("- Check if password was changed");
            println!("- Consider factory reset");
            return Ok(false);
        }
    };

    // 4. System information
    println!("\n4. System Information");
    if info.field(&["data"]).is_some() {
        println!("  Model: {}", field_display(&info, &["data", "model"]));
        println!("  Hardware Version: {}", field_display(&info, &["data", "hardware_version"]));
        println!("  Firmware Version: {}", field_display(&info, &["data", "firmware_version"]));
        println!("  Serial Number: {}", field_display(&info, &["data", "serial_number"]));
        println!("  Uptime: {} seconds", field_display(&info, &["data", "uptime"]));
        results.push(DiagnosticResult {
            test_name: "System Information".to_string(),
            success: true,
            details: format!("Model {}", field_display(&info, &["data", "model"])),
        });
    } else {
        println!("✗ Error parsing system info");
        println!("  Raw response: {}", info.pretty());
        results.push(DiagnosticResult {
            test_name: "System Information".to_string(),
            success: false,
            details: "Unexpected response shape".to_string(),
        });
    }

    // 5. Network settings
    println!("\n5. Network Settings");
    match client.network_settings().await {
        Ok(network) if network.field(&["data"]).is_some() => {
            println!("  IP Address: {}", field_display(&network, &["data", "ip"]));
            println!("  Netmask: {}", field_display(&network, &["data", "netmask"]));
            println!("  Gateway: {}", field_display(&network, &["data", "gateway"]));
            println!("  DNS1: {}", field_display(&network, &["data", "dns1"]));
            println!("  DNS2: {}", field_display(&network, &["data", "dns2"]));
            println!(
                "  DHCP: {}",
                if field_enabled(&network, &["data", "dhcp"]) { "Enabled" } else { "Disabled" }
            );
            println!("  HTTP Port: {}", field_display(&network, &["data", "http_port"]));
            println!("  RTSP Port: {}", field_display(&network, &["data", "rtsp_port"]));
            results.push(DiagnosticResult {
                test_name: "Network Settings".to_string(),
                success: true,
                details: "Retrieved".to_string(),
            });
        }
        Ok(other) => {
            println!("✗ Unexpected network settings response: {}", other.pretty());
            results.push(DiagnosticResult {
                test_name: "Network Settings".to_string(),
                success: false,
                details: "Unexpected response shape".to_string(),
            });
        }
        Err(e) => {
            println!("✗ Error getting network settings: {}", e);
            results.push(DiagnosticResult {
                test_name: "Network Settings".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }

    // 6. Video settings, main then sub stream
    println!("\n6. Video Settings");
    match client.video_stream_settings(0).await {
        Ok(video) if video.field(&["data"]).is_some() => {
            println!("  Main Stream:");
            println!("    Codec: {}", field_display(&video, &["data", "codec"]));
            println!("    Resolution: {}", field_display(&video, &["data", "resolution"]));
            println!("    FPS: {}", field_display(&video, &["data", "fps"]));
            println!("    Bitrate: {} kbps", field_display(&video, &["data", "bitrate"]));
            println!("    Quality: {}", field_display(&video, &["data", "quality"]));
            results.push(DiagnosticResult {
                test_name: "Video Settings (main)".to_string(),
                success: true,
                details: "Retrieved".to_string(),
            });
        }
        Ok(other) => {
            println!("✗ Unexpected video settings response: {}", other.pretty());
            results.push(DiagnosticResult {
                test_name: "Video Settings (main)".to_string(),
                success: false,
                details: "Unexpected response shape".to_string(),
            });
        }
        Err(e) => {
            println!("✗ Error getting video settings: {}", e);
            results.push(DiagnosticResult {
                test_name: "Video Settings (main)".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }
    match client.video_stream_settings(1).await {
        Ok(video) if video.field(&["data"]).is_some() => {
            println!("  Sub Stream:");
            println!("    Codec: {}", field_display(&video, &["data", "codec"]));
            println!("    Resolution: {}", field_display(&video, &["data", "resolution"]));
            println!("    FPS: {}", field_display(&video, &["data", "fps"]));
            println!("    Bitrate: {} kbps", field_display(&video, &["data", "bitrate"]));
        }
        Ok(_) | Err(_) => {
            // Not every firmware exposes the sub stream; not a failure.
            println!("  Sub stream not available");
        }
    }

    // 7. Image settings
    println!("\n7. Image Settings");
    match client.image_settings().await {
        Ok(image) if image.field(&["data"]).is_some() => {
            println!("  Brightness: {}", field_display(&image, &["data", "brightness"]));
            println!("  Contrast: {}", field_display(&image, &["data", "contrast"]));
            println!("  Saturation: {}", field_display(&image, &["data", "saturation"]));
            println!("  Sharpness: {}", field_display(&image, &["data", "sharpness"]));
            println!(
                "  WDR: {}",
                if field_enabled(&image, &["data", "wdr"]) { "Enabled" } else { "Disabled" }
            );
            println!("  Exposure Mode: {}", field_display(&image, &["data", "exposure_mode"]));
            results.push(DiagnosticResult {
                test_name: "Image Settings".to_string(),
                success: true,
                details: "Retrieved".to_string(),
            });
        }
        Ok(other) => {
            println!("⚠ Unexpected image settings response: {}", other.pretty());
            results.push(DiagnosticResult {
                test_name: "Image Settings".to_string(),
                success: false,
                details: "Unexpected response shape".to_string(),
            });
        }
        Err(e) => {
            println!("⚠ Error getting image settings: {}", e);
            results.push(DiagnosticResult {
                test_name: "Image Settings".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }

    // 8. Motion detection
    println!("\n8. Motion Detection");
    match client.motion_detection().await {
        Ok(motion) if motion.field(&["data"]).is_some() => {
            println!(
                "  Enabled: {}",
                if field_enabled(&motion, &["data", "enabled"]) { "Yes" } else { "No" }
            );
            println!("  Sensitivity: {}", field_display(&motion, &["data", "sensitivity"]));
            let region_count = motion
                .field(&["data", "regions"])
                .and_then(Value::as_array)
                .map(Vec::len)
                .unwrap_or(0);
            println!("  Regions: {} configured", region_count);
            results.push(DiagnosticResult {
                test_name: "Motion Detection".to_string(),
                success: true,
                details: "Retrieved".to_string(),
            });
        }
        Ok(other) => {
            println!("⚠ Unexpected motion detection response: {}", other.pretty());
            results.push(DiagnosticResult {
                test_name: "Motion Detection".to_string(),
                success: false,
                details: "Unexpected response shape".to_string(),
            });
        }
        Err(e) => {
            println!("⚠ Error getting motion detection settings: {}", e);
            results.push(DiagnosticResult {
                test_name: "Motion Detection".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }

    // 9. OSD
    println!("\n9. OSD (On-Screen Display)");
    match client.osd_settings().await {
        Ok(osd) if osd.field(&["data"]).is_some() => {
            println!(
                "  Time Display: {}",
                if field_enabled(&osd, &["data", "time_enabled"]) { "Enabled" } else { "Disabled" }
            );
            println!("  Camera Name: {}", field_display(&osd, &["data", "camera_name"]));
            println!(
                "  Name Display: {}",
                if field_enabled(&osd, &["data", "camera_name_enabled"]) { "Enabled" } else { "Disabled" }
            );
            results.push(DiagnosticResult {
                test_name: "OSD Settings".to_string(),
                success: true,
                details: "Retrieved".to_string(),
            });
        }
        Ok(other) => {
            println!("⚠ Unexpected OSD response: {}", other.pretty());
            results.push(DiagnosticResult {
                test_name: "OSD Settings".to_string(),
                success: false,
                details: "Unexpected response shape".to_string(),
            });
        }
        Err(e) => {
            println!("⚠ Error getting OSD settings: {}", e);
            results.push(DiagnosticResult {
                test_name: "OSD Settings".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }

    // 10. RTSP URLs (string construction only, no request)
    println!("\n10. RTSP Stream URLs");
    println!("  Main stream: {}", client.rtsp_url(1, false));
    println!("  Sub stream: {}", client.rtsp_url(2, false));
    println!("\n  ⚠ CRITICAL WARNING:");
    println!("  These cameras have BROKEN RTSP implementation!");
    println!("  Missing SPS/PPS headers - stream won't work with most players");
    println!("  See RTSP_ISSUE.md for details and workarounds");

    // 11. Snapshot capability
    println!("\n11. Snapshot Capability");
    println!("  Testing snapshot capture...");
    match client.snapshot(0, None).await {
        Ok(data) if !data.is_empty() => {
            println!("  ✓ Snapshot captured successfully ({} bytes)", data.len());
            println!("  Tip: Use snapshots instead of RTSP for reliable image capture");
            results.push(DiagnosticResult {
                test_name: "Snapshot Capture".to_string(),
                success: true,
                details: format!("{} bytes", data.len()),
            });
        }
        Ok(_) => {
            println!("  ✗ Snapshot capture returned an empty image");
            results.push(DiagnosticResult {
                test_name: "Snapshot Capture".to_string(),
                success: false,
                details: "Empty response".to_string(),
            });
        }
        Err(e) => {
            println!("  ✗ Error capturing snapshot: {}", e);
            results.push(DiagnosticResult {
                test_name: "Snapshot Capture".to_string(),
                success: false,
                details: format!("Failed: {}", e),
            });
        }
    }

    // Summary
    println!("\n{}", "=".repeat(60));
    println!("Diagnostics Complete ({:?})", suite_start.elapsed());
    println!("{}", "=".repeat(60));
    println!("\nSummary:");
    for result in &results {
        let status = if result.success { "✓ PASS" } else { "✗ FAIL" };
        println!("  {:<24} {:<8} {}", result.test_name, status, result.details);
    }
    println!("\n✓ Camera is accessible and API is functional");
    println!("⚠ RTSP streaming has known issues (missing SPS/PPS headers)");
    println!("✓ HTTP snapshot API works as alternative");
    println!("\nNext steps:");
    println!("- Use HTTP API for configuration");
    println!("- Use snapshot endpoint for image capture");
    println!("- See RTSP_ISSUE.md for streaming workarounds");

    Ok(true)
}
