use serde::{Deserialize, Serialize};

/// Lifecycle of a server-side extraction task.
///
/// Tasks start `pending`, move to `processing` once the worker picks
/// them up, and end `completed`. Per-file failures do not fail the
/// task; they show up in [`TaskStatus::failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Processing,
    Completed,
}

impl TaskState {
    /// Whether the server has finished working on the task.
    pub fn is_complete(self) -> bool {
        matches!(self, TaskState::Completed)
    }
}

/// Status payload reported for a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: TaskState,
    /// Share of input files processed so far, 0.0 to 100.0.
    pub progress: f64,
    pub total_files: usize,
    pub processed: usize,
    pub failed: usize,
    /// Server-side path of the exported artifact, empty until export ran.
    pub result_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}
