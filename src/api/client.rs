use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::models::{ApiConfig, UploadResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Download link not found")]
    NoDownloadLink,
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// One multipart field: the file's display name keys the field, the raw
/// bytes are the value.
#[derive(Debug, Clone)]
pub struct UploadPart {
    pub field_name: String,
    pub content: Vec<u8>,
    pub mime: String,
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn upload_url(&self) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        base.join("/upload")
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))
    }

    /// Send the whole batch as a single multipart POST and return the
    /// download link from the response.
    pub async fn upload(&self, parts: Vec<UploadPart>) -> Result<String> {
        let url = self.upload_url()?;

        let mut form = Form::new();
        for part in parts {
            let field = Part::bytes(part.content)
                .file_name(part.field_name.clone())
                .mime_str(&part.mime)?;
            form = form.part(part.field_name, field);
        }

        let client = Client::new();
        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::ApiError(format!("Upload request failed: {}", e)))?;

        let json: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("JSON decode error: {}", e)))?;

        if json.link.is_empty() {
            return Err(ApiError::NoDownloadLink);
        }

        Ok(json.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str, content: &[u8]) -> UploadPart {
        UploadPart {
            field_name: name.to_string(),
            content: content.to_vec(),
            mime: "text/html".to_string(),
        }
    }

    #[tokio::test]
    async fn upload_returns_link_from_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"link":"http://x/out.csv"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig {
            base_url: server.url(),
        });
        let link = client
            .upload(vec![
                part("folder/a.html", b"<html></html>"),
                part("folder/b.html", b"<html><body>b</body></html>"),
            ])
            .await
            .unwrap();

        assert_eq!(link, "http://x/out.csv");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_maps_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/upload")
            .with_status(500)
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig {
            base_url: server.url(),
        });
        let result = client.upload(vec![part("a.html", b"<html></html>")]).await;

        assert!(matches!(result, Err(ApiError::ApiError(_))));
    }

    #[tokio::test]
    async fn upload_rejects_missing_link() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/upload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = ApiClient::new(ApiConfig {
            base_url: server.url(),
        });
        let result = client.upload(vec![part("a.html", b"<html></html>")]).await;

        assert!(matches!(result, Err(ApiError::NoDownloadLink)));
    }

    #[test]
    fn upload_url_joins_endpoint_path() {
        let client = ApiClient::new(ApiConfig::default());
        assert_eq!(
            client.upload_url().unwrap().as_str(),
            "http://localhost:4000/upload"
        );
    }
}
