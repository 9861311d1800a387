use reqwest::{Client, RequestBuilder, Url};

use crate::api::RawApiRequest;

/// Fetch the exported result file for a completed task.
/// The body is an attachment and is never parsed.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub task_id: String,
}

impl RawApiRequest for DownloadRequest {
    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v1/task/{}/download", self.task_id))
            .unwrap();
        client.get(full_url)
    }
}
