use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::api::ApiRequest;
use crate::models::TaskState;

/// A single file payload queued for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Read a payload from disk, taking the file name from the path.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let content = tokio::fs::read(path).await?;

        Ok(Self { file_name, content })
    }
}

/// Submit files for extraction. The server creates the task and
/// hands back its id; all later calls key off that id.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub files: Vec<FileUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub task_id: String,
    pub status: TaskState,
    pub total_files: usize,
    pub message: String,
}

impl ApiRequest for UploadRequest {
    type Response = UploadResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v1/upload").unwrap();

        // One `files` part per payload, input order preserved.
        let mut form = Form::new();
        for file in self.files {
            let mime = mime_guess::from_path(&file.file_name).first_or_octet_stream();
            let part = Part::bytes(file.content)
                .file_name(file.file_name)
                .mime_str(mime.essence_str())
                .unwrap();
            form = form.part("files", part);
        }

        client.post(full_url).multipart(form)
    }
}
