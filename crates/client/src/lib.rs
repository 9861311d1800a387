/**
 * HTTP boundary for the contract key extraction service.
 *  - `ApiClient` wraps one pre-configured reqwest client
 *  - one request type per endpoint, dispatched through
 *    the `ApiRequest` / `RawApiRequest` traits
 */
pub mod api;
/**
 * Wire shapes the server reports back: task lifecycle
 *  and the structured extraction results.
 */
pub mod models;

pub mod prelude {
    pub use crate::api::v1::health::HealthResponse;
    pub use crate::api::v1::upload::{FileUpload, UploadResponse};
    pub use crate::api::{ApiClient, ApiConfig, ApiError, ApiRequest, RawApiRequest};
    pub use crate::models::{ExtractionResponse, ExtractionResult, TaskState, TaskStatus};
}
