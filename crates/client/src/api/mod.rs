mod client;
mod config;
mod error;

pub mod v1;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use error::ApiError;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// An endpoint request whose response body is parsed as JSON.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}

/// An endpoint request whose response body is handed back verbatim.
pub trait RawApiRequest {
    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}
