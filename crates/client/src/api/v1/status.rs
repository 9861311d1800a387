use reqwest::{Client, RequestBuilder, Url};

use crate::api::ApiRequest;
use crate::models::TaskStatus;

/// Poll the processing state of a task.
#[derive(Debug, Clone)]
pub struct StatusRequest {
    pub task_id: String,
}

impl ApiRequest for StatusRequest {
    type Response = TaskStatus;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url
            .join(&format!("/api/v1/task/{}", self.task_id))
            .unwrap();
        client.get(full_url)
    }
}
