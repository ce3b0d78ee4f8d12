use serde::Serialize;
use serde_json::Value;

/// Setter payloads for both API dialects. Every field left as `None` is
/// omitted from the request body, so the camera only ever sees the settings
/// the caller explicitly asked to change.

#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns2: Option<String>,
}

/// Stream settings for the Concord dialect. The channel is always sent; the
/// rest is sparse.
#[derive(Debug, Clone, Serialize)]
pub struct VideoStreamSettings {
    pub channel: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gop: Option<u32>,
}

impl VideoStreamSettings {
    pub fn for_channel(channel: u32) -> Self {
        VideoStreamSettings {
            channel,
            codec: None,
            resolution: None,
            fps: None,
            bitrate: None,
            bitrate_control: None,
            quality: None,
            gop: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wdr: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MotionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OsdSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_enabled: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_name_enabled: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_name_position: Option<String>,
}

/// Encode settings for the netsdk dialect, which uses camelCase key names on
/// the wire (`codecType`, `h264Profile`, `constantBitRate`, ...).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncodeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h264_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_bit_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_rate_control_type: Option<String>,
}

impl VideoEncodeSettings {
    pub fn is_empty(&self) -> bool {
        self.codec_type.is_none()
            && self.h264_profile.is_none()
            && self.resolution.is_none()
            && self.frame_rate.is_none()
            && self.constant_bit_rate.is_none()
            && self.bit_rate_control_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_network_fields_are_omitted() {
        let settings = NetworkSettings {
            dhcp: Some(0),
            ip: Some("192.168.1.100".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"dhcp": 0, "ip": "192.168.1.100"}));
    }

    #[test]
    fn fully_unset_payload_serializes_to_empty_object() {
        let value = serde_json::to_value(NetworkSettings::default()).unwrap();
        assert_eq!(value, json!({}));
        let value = serde_json::to_value(ImageSettings::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn video_stream_always_carries_channel() {
        let mut settings = VideoStreamSettings::for_channel(1);
        settings.bitrate = Some(4096);
        settings.fps = Some(25);
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"channel": 1, "bitrate": 4096, "fps": 25}));
    }

    #[test]
    fn explicit_zero_is_still_included() {
        // dhcp=0 is a real value (disable DHCP), not an unset field.
        let settings = NetworkSettings {
            dhcp: Some(0),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"dhcp": 0}));
    }

    #[test]
    fn netsdk_settings_use_camel_case_keys() {
        let settings = VideoEncodeSettings {
            codec_type: Some("H.264".to_string()),
            h264_profile: Some("main".to_string()),
            constant_bit_rate: Some(4096),
            bit_rate_control_type: Some("CBR".to_string()),
            frame_rate: Some(15),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({
                "codecType": "H.264",
                "h264Profile": "main",
                "frameRate": 15,
                "constantBitRate": 4096,
                "bitRateControlType": "CBR"
            })
        );
    }

    #[test]
    fn encode_settings_emptiness() {
        assert!(VideoEncodeSettings::default().is_empty());
        let settings = VideoEncodeSettings {
            resolution: Some("1920x1080".to_string()),
            ..Default::default()
        };
        assert!(!settings.is_empty());
    }

    #[test]
    fn motion_regions_pass_through_untouched() {
        let settings = MotionSettings {
            enabled: Some(1),
            regions: Some(vec![json!({"x": 0, "y": 0, "w": 64, "h": 64})]),
            ..Default::default()
        };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({"enabled": 1, "regions": [{"x": 0, "y": 0, "w": 64, "h": 64}]})
        );
    }
}
