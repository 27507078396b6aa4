mod client;
mod models;

pub use client::{ApiClient, ApiError, Result, UploadPart};
pub use models::{ApiConfig, UploadResponse};
