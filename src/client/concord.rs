use crate::camera_config::CameraConnectionConfig;
use crate::client::response::ApiResponse;
use crate::common::file_utils;
use crate::errors::AppError;
use crate::settings::{
    ImageSettings, MotionSettings, NetworkSettings, OsdSettings, VideoStreamSettings,
};
use diqwest::WithDigestAuth;
use log::{debug, info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::path::Path;

const USER_AGENT: &str = "Camera-API-Client/1.0";

/// Client for the Concord `/api/v1` dialect (HTTP Digest auth). Each method
/// issues exactly one request; there is no retry, caching or shared state
/// beyond the reqwest client itself.
pub struct ConcordClient {
    config: CameraConnectionConfig,
    http: Client,
}

impl ConcordClient {
    pub fn new(config: CameraConnectionConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(ConcordClient { config, http })
    }

    pub fn config(&self) -> &CameraConnectionConfig {
        &self.config
    }

    /// Single request against the camera API. Non-2xx fails before any body
    /// decoding; image content types come back as tagged binary; 2xx bodies
    /// that are not valid JSON fall back to raw text.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, AppError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        debug!("Concord [{}]: {} {}", self.config.host, method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json");
        if let Some(json_body) = body {
            builder = builder.json(json_body);
        }

        let response = builder
            .send_with_digest_auth(&self.config.username, &self.config.password)
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.contains("image") {
            let data = response.bytes().await?;
            debug!(
                "Concord [{}]: binary response ({}, {} bytes)",
                self.config.host,
                content_type,
                data.len()
            );
            return Ok(ApiResponse::Binary {
                content_type,
                data: data.to_vec(),
            });
        }

        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            Err(e) => {
                debug!(
                    "Concord [{}]: body is not JSON ({}), falling back to raw text.",
                    self.config.host, e
                );
                Ok(ApiResponse::Raw(text))
            }
        }
    }

    /// System information including model and firmware version.
    pub async fn system_info(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/api/v1/system/info", None).await
    }

    pub async fn network_settings(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/api/v1/system/network", None)
            .await
    }

    pub async fn set_network_settings(
        &self,
        settings: &NetworkSettings,
    ) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize network settings: {}", e)))?;
        self.request(Method::POST, "/api/v1/system/network", Some(&body))
            .await
    }

    /// Stream settings for a channel (0=main, 1=sub).
    pub async fn video_stream_settings(&self, channel: u32) -> Result<ApiResponse, AppError> {
        let endpoint = format!("/api/v1/video/stream?channel={}", channel);
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn set_video_stream_settings(
        &self,
        settings: &VideoStreamSettings,
    ) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize video settings: {}", e)))?;
        self.request(Method::POST, "/api/v1/video/stream", Some(&body))
            .await
    }

    pub async fn image_settings(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/api/v1/image/settings", None)
            .await
    }

    pub async fn set_image_settings(
        &self,
        settings: &ImageSettings,
    ) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize image settings: {}", e)))?;
        self.request(Method::POST, "/api/v1/image/settings", Some(&body))
            .await
    }

    pub async fn motion_detection(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/api/v1/motion/detection", None)
            .await
    }

    pub async fn set_motion_detection(
        &self,
        settings: &MotionSettings,
    ) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize motion settings: {}", e)))?;
        self.request(Method::POST, "/api/v1/motion/detection", Some(&body))
            .await
    }

    pub async fn osd_settings(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/api/v1/osd/settings", None).await
    }

    pub async fn set_osd_settings(&self, settings: &OsdSettings) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize OSD settings: {}", e)))?;
        self.request(Method::POST, "/api/v1/osd/settings", Some(&body))
            .await
    }

    /// Capture a JPEG snapshot (channel 0=main, 1=sub). When `output` is
    /// given the bytes are also written byte-for-byte to that path. This is
    /// the only reliable way to get an image off these cameras; RTSP is
    /// broken.
    pub async fn snapshot(
        &self,
        channel: u32,
        output: Option<&Path>,
    ) -> Result<Vec<u8>, AppError> {
        let endpoint = format!("/api/v1/snapshot?channel={}", channel);
        let response = self.request(Method::GET, &endpoint, None).await?;

        match response {
            ApiResponse::Binary { data, .. } => {
                if let Some(path) = output {
                    file_utils::write_snapshot(path, &data)?;
                    info!(
                        "✅ Concord [{}]: saved snapshot ({} bytes) to {}",
                        self.config.host,
                        data.len(),
                        path.display()
                    );
                }
                Ok(data)
            }
            _ => Err(AppError::Snapshot(
                "Failed to capture snapshot: response is not an image".to_string(),
            )),
        }
    }

    pub async fn reboot(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, "/api/v1/system/reboot", None)
            .await
    }

    /// Factory reset. Erases all settings; the CLI gates this behind an exact
    /// confirmation string.
    pub async fn factory_reset(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, "/api/v1/system/reset", None)
            .await
    }

    /// RTSP URL for a stream channel (1=main 4K, 2=sub 720p). No request is
    /// made; see `CameraConnectionConfig::rtsp_url`.
    pub fn rtsp_url(&self, channel: u32, with_auth: bool) -> String {
        self.config.rtsp_url(channel, with_auth)
    }
}
