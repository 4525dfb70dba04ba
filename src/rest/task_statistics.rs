use super::*;

/// Per-vertex wire record, keyed under `tasks` in [`CheckpointStatistics`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskCheckpointStatistics {
    pub id: CheckpointId,
    pub status: CheckpointStatsStatus,
    pub latest_ack_timestamp: EventTime,
    pub checkpointed_size: i64,
    pub state_size: i64,
    pub end_to_end_duration: i64,
    /// Legacy alignment metric, always zero in produced records.
    pub alignment_buffered: i64,
    pub processed_data: i64,
    pub persisted_data: i64,
    pub num_subtasks: u32,
    pub num_acknowledged_subtasks: u32,
}

impl TaskCheckpointStatistics {
    /// Project one per-vertex source aggregate into its wire record.
    pub fn from_task_stats(
        checkpoint_id: CheckpointId,
        status: CheckpointStatsStatus,
        trigger_timestamp: EventTime,
        task: &TaskStateStats,
    ) -> Self {
        Self {
            id: checkpoint_id,
            status,
            latest_ack_timestamp: task.latest_ack_timestamp,
            checkpointed_size: task.checkpointed_size,
            state_size: task.state_size,
            end_to_end_duration: task.end_to_end_duration(trigger_timestamp),
            alignment_buffered: 0,
            processed_data: task.processed_data,
            persisted_data: task.persisted_data,
            num_subtasks: task.num_subtasks,
            num_acknowledged_subtasks: task.num_acknowledged_subtasks,
        }
    }
}
