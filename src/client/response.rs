use serde_json::Value;

/// Decoded camera API response. The cameras are not consistent about what
/// they return: most endpoints answer JSON, the hi3510 CGI answers plain
/// text, and the snapshot endpoints answer a JPEG. No schema validation is
/// attempted; callers look up the fields they need and handle absence.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body decoded as JSON.
    Json(Value),
    /// 2xx body that was not valid JSON, carried through as-is.
    Raw(String),
    /// Binary payload (snapshots), tagged by the Content-Type header.
    Binary { content_type: String, data: Vec<u8> },
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, ApiResponse::Binary { .. })
    }

    /// Optimistic nested field lookup, e.g. `resp.field(&["data", "model"])`.
    pub fn field(&self, path: &[&str]) -> Option<&Value> {
        let mut current = self.as_json()?;
        for key in path {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Convenience for the netsdk dialect, whose setters answer
    /// `{"statusCode": 0}` on success.
    pub fn status_code(&self) -> Option<i64> {
        self.field(&["statusCode"]).and_then(Value::as_i64)
    }

    /// Human-readable rendering for CLI output: pretty JSON, raw text as-is,
    /// or a short descriptor for binary payloads.
    pub fn pretty(&self) -> String {
        match self {
            ApiResponse::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ApiResponse::Raw(text) => text.clone(),
            ApiResponse::Binary { content_type, data } => {
                format!("<binary {} response, {} bytes>", content_type, data.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_field_lookup() {
        let resp = ApiResponse::Json(json!({"data": {"model": "CNC81BA-V4"}}));
        assert_eq!(
            resp.field(&["data", "model"]).and_then(Value::as_str),
            Some("CNC81BA-V4")
        );
        assert!(resp.field(&["data", "missing"]).is_none());
    }

    #[test]
    fn raw_response_has_no_fields() {
        let resp = ApiResponse::Raw("not json".to_string());
        assert!(resp.field(&["data"]).is_none());
        assert_eq!(resp.pretty(), "not json");
    }

    #[test]
    fn status_code_extraction() {
        let ok = ApiResponse::Json(json!({"statusCode": 0}));
        assert_eq!(ok.status_code(), Some(0));
        let failed = ApiResponse::Json(json!({"statusCode": 4}));
        assert_eq!(failed.status_code(), Some(4));
        assert_eq!(ApiResponse::Raw(String::new()).status_code(), None);
    }

    #[test]
    fn binary_pretty_prints_descriptor() {
        let resp = ApiResponse::Binary {
            content_type: "image/jpeg".to_string(),
            data: vec![0xFF, 0xD8, 0xFF],
        };
        assert!(resp.is_binary());
        assert_eq!(resp.pretty(), "<binary image/jpeg response, 3 bytes>");
    }
}
