use super::*;

/// Fields shared by every checkpoint status variant.
///
/// Wire names are frozen. `state_size` historically carries the total
/// checkpointed data size and keeps its old name so existing web UIs do not
/// break; `alignment_buffered` survives as a zero-filled legacy field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckpointSummary {
    pub id: CheckpointId,
    pub status: CheckpointStatsStatus,
    pub is_savepoint: bool,
    #[serde(rename = "savepointFormat")]
    pub savepoint_format: Option<String>,
    pub trigger_timestamp: EventTime,
    pub latest_ack_timestamp: EventTime,
    pub checkpointed_size: i64,
    pub state_size: i64,
    pub end_to_end_duration: i64,
    pub alignment_buffered: i64,
    pub processed_data: i64,
    pub persisted_data: i64,
    pub num_subtasks: u32,
    pub num_acknowledged_subtasks: u32,
    pub checkpoint_type: RestCheckpointType,
    /// Per-vertex breakdown; empty when task detail was not requested.
    pub tasks: BTreeMap<VertexId, TaskCheckpointStatistics>,
}

/// Checkpoint status record served to monitoring clients.
///
/// Polymorphic on the `className` discriminator. Exactly one variant is
/// active per record; records are immutable value objects and two records of
/// different variants are never equal, even with identical shared fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "className")]
pub enum CheckpointStatistics {
    #[serde(rename = "in_progress")]
    InProgress {
        #[serde(flatten)]
        summary: CheckpointSummary,
    },
    #[serde(rename = "completed")]
    Completed {
        #[serde(flatten)]
        summary: CheckpointSummary,
        external_path: Option<String>,
        discarded: bool,
    },
    #[serde(rename = "failed")]
    Failed {
        #[serde(flatten)]
        summary: CheckpointSummary,
        failure_timestamp: EventTime,
        failure_message: Option<String>,
    },
}

impl CheckpointStatistics {
    /// Shared fields of whichever variant is active.
    pub fn summary(&self) -> &CheckpointSummary {
        match self {
            Self::InProgress { summary }
            | Self::Completed { summary, .. }
            | Self::Failed { summary, .. } => summary,
        }
    }

    /// Build the wire record for one checkpoint snapshot.
    ///
    /// With `include_task_detail` the snapshot's per-vertex statistics are
    /// expanded under `tasks`; otherwise the map is present but empty. The
    /// variant is selected by the snapshot's kind; a view that matches no
    /// known kind fails the conversion.
    pub fn from_snapshot(
        snapshot: &dyn CheckpointStatsView,
        include_task_detail: bool,
    ) -> Result<Self> {
        let base = snapshot.base();
        tracing::debug!(
            "translating checkpoint {} snapshot (task detail: {})",
            base.checkpoint_id,
            include_task_detail
        );

        let tasks: BTreeMap<VertexId, TaskCheckpointStatistics> = if include_task_detail {
            base.task_stats
                .iter()
                .map(|task| {
                    (
                        task.job_vertex_id,
                        TaskCheckpointStatistics::from_task_stats(
                            base.checkpoint_id,
                            base.status,
                            base.trigger_timestamp,
                            task,
                        ),
                    )
                })
                .collect()
        } else {
            BTreeMap::new()
        };

        let snapshot_type = base.properties.snapshot_type;
        let savepoint_format = snapshot_type
            .savepoint_format()
            .map(|format| format.as_str().to_owned());
        let checkpoint_type = RestCheckpointType::resolve(snapshot_type, base.unaligned)?;

        // Completed snapshots carry the full snapshot type object; failed and
        // pending ones may not, so those source the flag from the trigger
        // properties instead.
        let is_savepoint = if snapshot.as_completed().is_some() {
            snapshot_type.is_savepoint()
        } else {
            base.properties.is_savepoint()
        };

        let summary = CheckpointSummary {
            id: base.checkpoint_id,
            status: base.status,
            is_savepoint,
            savepoint_format,
            trigger_timestamp: base.trigger_timestamp,
            latest_ack_timestamp: base.latest_ack_timestamp,
            checkpointed_size: base.checkpointed_size,
            state_size: base.state_size,
            end_to_end_duration: base.end_to_end_duration,
            alignment_buffered: 0,
            processed_data: base.processed_data,
            persisted_data: base.persisted_data,
            num_subtasks: base.num_subtasks,
            num_acknowledged_subtasks: base.num_acknowledged_subtasks,
            checkpoint_type,
            tasks,
        };

        if let Some(completed) = snapshot.as_completed() {
            Ok(Self::Completed {
                summary,
                external_path: completed.external_path.clone(),
                discarded: completed.discarded,
            })
        } else if let Some(failed) = snapshot.as_failed() {
            Ok(Self::Failed {
                summary,
                failure_timestamp: failed.failure_timestamp,
                failure_message: failed.failure_message.clone(),
            })
        } else if snapshot.as_pending().is_some() {
            Ok(Self::InProgress { summary })
        } else {
            bail!(
                "checkpoint stats of kind {} cannot be converted",
                snapshot.kind_name()
            )
        }
    }
}
