use bytes::Bytes;
use reqwest::Client;
use url::Url;

use crate::models::{ExtractionResponse, TaskStatus};

use super::v1::download::DownloadRequest;
use super::v1::health::{HealthRequest, HealthResponse};
use super::v1::results::ResultsRequest;
use super::v1::status::StatusRequest;
use super::v1::upload::{FileUpload, UploadRequest, UploadResponse};
use super::{ApiConfig, ApiError, ApiRequest, RawApiRequest};

#[derive(Debug, Clone)]
pub struct ApiClient {
    remote: Url,
    client: Client,
}

impl ApiClient {
    /// Client with the default 30 second timeout.
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        Self::with_config(remote, &ApiConfig::default())
    }

    pub fn with_config(remote: &Url, config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            let status = response.status();
            let body = response.text().await?;
            tracing::error!("request failed with status {}: {}", status, body);
            Err(ApiError::HttpStatus(status, body))
        }
    }

    /// Same dispatch path as [`ApiClient::call`], without parsing the body.
    pub async fn call_raw<T: RawApiRequest>(&self, request: T) -> Result<Bytes, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?)
        } else {
            let status = response.status();
            let body = response.text().await?;
            tracing::error!("request failed with status {}: {}", status, body);
            Err(ApiError::HttpStatus(status, body))
        }
    }

    /// Upload files for extraction. The server assigns the task id.
    pub async fn upload_files(&self, files: Vec<FileUpload>) -> Result<UploadResponse, ApiError> {
        tracing::debug!("uploading {} file(s)", files.len());
        self.call(UploadRequest { files }).await
    }

    pub async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        self.call(StatusRequest {
            task_id: task_id.to_string(),
        })
        .await
    }

    pub async fn task_results(&self, task_id: &str) -> Result<ExtractionResponse, ApiError> {
        self.call(ResultsRequest {
            task_id: task_id.to_string(),
        })
        .await
    }

    /// Fetch the exported result artifact as raw bytes.
    pub async fn download_result(&self, task_id: &str) -> Result<Bytes, ApiError> {
        self.call_raw(DownloadRequest {
            task_id: task_id.to_string(),
        })
        .await
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.call(HealthRequest).await
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}
