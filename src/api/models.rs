use serde::{Deserialize, Serialize};

/// Response from the /upload endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub link: String,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Resolve the configuration once at startup. `CSV_UPLOADER_BASE_URL`
    /// overrides the default endpoint.
    pub fn from_env() -> Self {
        match std::env::var("CSV_UPLOADER_BASE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => Self { base_url },
            _ => Self::default(),
        }
    }
}
