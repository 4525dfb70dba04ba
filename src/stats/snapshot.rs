use super::*;

/// Lifecycle status of a checkpoint at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckpointStatsStatus {
    InProgress,
    Completed,
    Failed,
}

/// Per-vertex aggregate of a checkpoint's subtask statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStateStats {
    pub job_vertex_id: VertexId,
    /// Latest acknowledgement timestamp across subtasks; `UNSET_TIMESTAMP`
    /// until the first subtask acknowledges.
    pub latest_ack_timestamp: EventTime,
    pub checkpointed_size: i64,
    pub state_size: i64,
    pub processed_data: i64,
    pub persisted_data: i64,
    pub num_subtasks: u32,
    pub num_acknowledged_subtasks: u32,
}

impl TaskStateStats {
    /// Duration from the checkpoint trigger to the latest acknowledgement,
    /// clamped at zero while no subtask has acknowledged.
    pub fn end_to_end_duration(&self, trigger_timestamp: EventTime) -> i64 {
        (self.latest_ack_timestamp - trigger_timestamp).max(0)
    }
}

/// Metrics shared by every checkpoint snapshot kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointStatsBase {
    pub checkpoint_id: CheckpointId,
    pub status: CheckpointStatsStatus,
    pub properties: CheckpointProperties,
    /// Whether the checkpoint ran without barrier alignment.
    pub unaligned: bool,
    pub trigger_timestamp: EventTime,
    pub latest_ack_timestamp: EventTime,
    pub checkpointed_size: i64,
    pub state_size: i64,
    pub end_to_end_duration: i64,
    pub processed_data: i64,
    pub persisted_data: i64,
    pub num_subtasks: u32,
    pub num_acknowledged_subtasks: u32,
    pub task_stats: Vec<TaskStateStats>,
}

/// Snapshot of a checkpoint that has not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCheckpointStats {
    pub base: CheckpointStatsBase,
}

/// Snapshot of a successfully completed checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedCheckpointStats {
    pub base: CheckpointStatsBase,
    /// Storage location, if the checkpoint is externally addressable.
    pub external_path: Option<String>,
    /// True once the checkpoint has been superseded and reclaimed.
    pub discarded: bool,
}

/// Snapshot of a failed checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedCheckpointStats {
    pub base: CheckpointStatsBase,
    pub failure_timestamp: EventTime,
    pub failure_message: Option<String>,
}

/// Read-only view over one checkpoint snapshot.
///
/// The coordinator hands snapshots to the monitoring layer through this seam.
/// Exactly one of the `as_*` probes returns `Some` for a well-formed
/// snapshot; translation rejects views where none does.
pub trait CheckpointStatsView {
    fn base(&self) -> &CheckpointStatsBase;

    /// Kind name used in conversion error messages.
    fn kind_name(&self) -> &'static str;

    fn as_pending(&self) -> Option<&PendingCheckpointStats> {
        None
    }

    fn as_completed(&self) -> Option<&CompletedCheckpointStats> {
        None
    }

    fn as_failed(&self) -> Option<&FailedCheckpointStats> {
        None
    }
}

impl CheckpointStatsView for PendingCheckpointStats {
    fn base(&self) -> &CheckpointStatsBase {
        &self.base
    }

    fn kind_name(&self) -> &'static str {
        "pending"
    }

    fn as_pending(&self) -> Option<&PendingCheckpointStats> {
        Some(self)
    }
}

impl CheckpointStatsView for CompletedCheckpointStats {
    fn base(&self) -> &CheckpointStatsBase {
        &self.base
    }

    fn kind_name(&self) -> &'static str {
        "completed"
    }

    fn as_completed(&self) -> Option<&CompletedCheckpointStats> {
        Some(self)
    }
}

impl CheckpointStatsView for FailedCheckpointStats {
    fn base(&self) -> &CheckpointStatsBase {
        &self.base
    }

    fn kind_name(&self) -> &'static str {
        "failed"
    }

    fn as_failed(&self) -> Option<&FailedCheckpointStats> {
        Some(self)
    }
}
