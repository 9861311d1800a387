use reqwest::{Client, RequestBuilder, Url};

use crate::api::ApiRequest;
use crate::models::ExtractionResponse;

/// Fetch the structured extraction results of a completed task.
#[derive(Debug, Clone)]
pub struct ResultsRequest {
    pub task_id: String,
}

impl ApiRequest for ResultsRequest {
    type Response = ExtractionResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v1/task/{}/results", self.task_id))
            .unwrap();
        client.get(full_url)
    }
}
