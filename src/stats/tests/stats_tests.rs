use super::*;
use crate::types::{VertexId, UNSET_TIMESTAMP};

fn task_stats(vertex: u32, latest_ack_timestamp: EventTime) -> TaskStateStats {
    TaskStateStats {
        job_vertex_id: VertexId::new(vertex),
        latest_ack_timestamp,
        checkpointed_size: 100,
        state_size: 200,
        processed_data: 10,
        persisted_data: 5,
        num_subtasks: 2,
        num_acknowledged_subtasks: 2,
    }
}

fn base(status: CheckpointStatsStatus) -> CheckpointStatsBase {
    CheckpointStatsBase {
        checkpoint_id: 1,
        status,
        properties: CheckpointProperties::checkpoint(),
        unaligned: false,
        trigger_timestamp: 1_000,
        latest_ack_timestamp: 1_500,
        checkpointed_size: 100,
        state_size: 200,
        end_to_end_duration: 500,
        processed_data: 10,
        persisted_data: 5,
        num_subtasks: 2,
        num_acknowledged_subtasks: 2,
        task_stats: vec![],
    }
}

#[test]
fn test_snapshot_type_savepoint_probes() {
    let savepoint = SnapshotType::Savepoint {
        format: SavepointFormat::Canonical,
        synchronous: false,
    };
    assert!(savepoint.is_savepoint());
    assert_eq!(
        savepoint.savepoint_format(),
        Some(SavepointFormat::Canonical)
    );

    assert!(!SnapshotType::Checkpoint.is_savepoint());
    assert_eq!(SnapshotType::Checkpoint.savepoint_format(), None);
}

#[test]
fn test_savepoint_format_wire_names() {
    assert_eq!(SavepointFormat::Canonical.as_str(), "CANONICAL");
    assert_eq!(SavepointFormat::Native.as_str(), "NATIVE");
}

#[test]
fn test_properties_is_savepoint_delegates_to_snapshot_type() {
    assert!(!CheckpointProperties::checkpoint().is_savepoint());
    assert!(CheckpointProperties::savepoint(SavepointFormat::Native, true).is_savepoint());
}

#[test]
fn test_task_state_stats_end_to_end_duration() {
    let task = task_stats(1, 1_500);
    assert_eq!(task.end_to_end_duration(1_000), 500);
}

#[test]
fn test_task_state_stats_duration_clamped_when_unacknowledged() {
    let task = task_stats(1, UNSET_TIMESTAMP);
    assert_eq!(task.end_to_end_duration(1_000), 0);
}

#[test]
fn test_pending_view_probes() {
    let pending = PendingCheckpointStats {
        base: base(CheckpointStatsStatus::InProgress),
    };
    assert_eq!(pending.kind_name(), "pending");
    assert!(pending.as_pending().is_some());
    assert!(pending.as_completed().is_none());
    assert!(pending.as_failed().is_none());
}

#[test]
fn test_completed_view_probes() {
    let completed = CompletedCheckpointStats {
        base: base(CheckpointStatsStatus::Completed),
        external_path: Some("/ckpt/1".to_owned()),
        discarded: false,
    };
    assert_eq!(completed.kind_name(), "completed");
    assert!(completed.as_completed().is_some());
    assert!(completed.as_pending().is_none());
    assert!(completed.as_failed().is_none());
}

#[test]
fn test_failed_view_probes() {
    let failed = FailedCheckpointStats {
        base: base(CheckpointStatsStatus::Failed),
        failure_timestamp: 2_000,
        failure_message: Some("timeout".to_owned()),
    };
    assert_eq!(failed.kind_name(), "failed");
    assert!(failed.as_failed().is_some());
    assert!(failed.as_pending().is_none());
    assert!(failed.as_completed().is_none());
}

#[test]
fn test_stats_status_wire_names() {
    let encoded = serde_json::to_value(CheckpointStatsStatus::InProgress).unwrap();
    assert_eq!(encoded, serde_json::json!("IN_PROGRESS"));
    let encoded = serde_json::to_value(CheckpointStatsStatus::Completed).unwrap();
    assert_eq!(encoded, serde_json::json!("COMPLETED"));
    let encoded = serde_json::to_value(CheckpointStatsStatus::Failed).unwrap();
    assert_eq!(encoded, serde_json::json!("FAILED"));
}
