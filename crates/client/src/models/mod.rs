pub mod contract;
pub mod task;

pub use contract::{ExtractionResponse, ExtractionResult};
pub use task::{TaskState, TaskStatus};
