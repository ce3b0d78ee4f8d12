use crate::camera_config::CameraConnectionConfig;
use crate::client::response::ApiResponse;
use crate::common::file_utils;
use crate::errors::AppError;
use crate::settings::VideoEncodeSettings;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use std::path::Path;

/// Client for the Guangzhou Juan Optical `netsdk` dialect (HTTP Basic auth),
/// found on Concord and assorted rebranded cameras. Same one-request-per-call
/// shape as the Concord client, different endpoints and auth scheme.
pub struct NetsdkClient {
    config: CameraConnectionConfig,
    http: Client,
}

impl NetsdkClient {
    pub fn new(config: CameraConnectionConfig) -> Result<Self, AppError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(NetsdkClient { config, http })
    }

    pub fn config(&self) -> &CameraConnectionConfig {
        &self.config
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, AppError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        debug!("netsdk [{}]: {} {}", self.config.host, method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .basic_auth(&self.config.username, Some(&self.config.password));
        if let Some(json_body) = body {
            builder = builder.json(json_body);
        }

        let response = builder.send().await?;
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

        if content_type.starts_with("image/") {
            let data = response.bytes().await?;
            return Ok(ApiResponse::Binary {
                content_type,
                data: data.to_vec(),
            });
        }

        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ApiResponse::Json(value)),
            // The hi3510 CGI and a few XML endpoints answer plain text.
            Err(_) => Ok(ApiResponse::Raw(text)),
        }
    }

    /// Check reachability and credentials via the user list endpoint. The
    /// camera reports success inside the XML body rather than via the status
    /// code; transport failures report as unreachable rather than erroring.
    pub async fn test_connection(&self) -> bool {
        let url = format!(
            "{}/user/user_list.xml?username={}&password={}",
            self.config.base_url(),
            self.config.username,
            self.config.password
        );
        debug!("netsdk [{}]: GET {}", self.config.host, url);
        match self.http.get(&url).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => body.contains(r#"ret="success""#),
                Err(_) => false,
            },
            Err(e) => {
                debug!("netsdk [{}]: connection test failed: {}", self.config.host, e);
                false
            }
        }
    }

    /// OEM manufacturer info. This endpoint answers without authentication.
    pub async fn oem_info(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/netsdk/oem/deviceinfo", None)
            .await
    }

    pub async fn device_info(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/netsdk/system/deviceinfo", None)
            .await
    }

    /// Video encode settings for a channel (101=main, 102=sub).
    pub async fn video_encode(&self, channel: u32) -> Result<ApiResponse, AppError> {
        let endpoint = format!("/netsdk/video/encode/channel/{}", channel);
        self.request(Method::GET, &endpoint, None).await
    }

    /// Option ranges the camera accepts for a channel (codecs, resolutions,
    /// frame rate and bitrate bounds).
    pub async fn video_encode_properties(&self, channel: u32) -> Result<ApiResponse, AppError> {
        let endpoint = format!("/netsdk/video/encode/channel/{}/properties", channel);
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn set_video_encode(
        &self,
        channel: u32,
        settings: &VideoEncodeSettings,
    ) -> Result<ApiResponse, AppError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| AppError::Decode(format!("Failed to serialize encode settings: {}", e)))?;
        let endpoint = format!("/netsdk/video/encode/channel/{}", channel);
        self.request(Method::PUT, &endpoint, Some(&body)).await
    }

    pub async fn audio_encode(&self, channel: u32) -> Result<ApiResponse, AppError> {
        let endpoint = format!("/netsdk/audio/encode/channel/{}", channel);
        self.request(Method::GET, &endpoint, None).await
    }

    pub async fn set_audio_enabled(
        &self,
        channel: u32,
        enabled: bool,
    ) -> Result<ApiResponse, AppError> {
        let endpoint = format!("/netsdk/audio/encode/channel/{}", channel);
        let body = serde_json::json!({ "enabled": enabled });
        self.request(Method::PUT, &endpoint, Some(&body)).await
    }

    /// RTMP configuration. Usually broken on these cameras, but the endpoint
    /// exists and sometimes answers.
    pub async fn rtmp_status(&self) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, "/netsdk/rtmp", None).await
    }

    /// Video encoder attributes via the legacy hi3510 CGI (plain text).
    pub async fn hi3510_venc(&self) -> Result<ApiResponse, AppError> {
        self.request(
            Method::GET,
            "/cgi-bin/hi3510/param.cgi?cmd=getvencattr",
            None,
        )
        .await
    }

    /// Download a JPEG snapshot (channel 1=main, 2=sub) to `output`. Returns
    /// the number of bytes written. A non-image response is a failure.
    pub async fn snapshot(&self, channel: u32, output: &Path) -> Result<usize, AppError> {
        let endpoint = format!("/snapshot?chn={}", channel);
        let response = self.request(Method::GET, &endpoint, None).await?;

        match response {
            ApiResponse::Binary { data, .. } => {
                file_utils::write_snapshot(output, &data)?;
                info!(
                    "✅ netsdk [{}]: saved snapshot ({} bytes) to {}",
                    self.config.host,
                    data.len(),
                    output.display()
                );
                Ok(data.len())
            }
            _ => Err(AppError::Snapshot(
                "Response is not an image".to_string(),
            )),
        }
    }
}
