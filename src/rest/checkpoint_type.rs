use super::*;

/// Backward-compatible checkpoint type tag exposed on the monitoring wire.
///
/// External clients have depended on these four values across versions; new
/// internal snapshot type distinctions must collapse onto them and never add
/// a fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestCheckpointType {
    Checkpoint,
    UnalignedCheckpoint,
    Savepoint,
    SyncSavepoint,
}

impl RestCheckpointType {
    /// Collapse the internal snapshot type plus the unaligned flag onto the
    /// four wire tags.
    ///
    /// Savepoints cannot be unaligned; that combination indicates a bug in
    /// the upstream snapshot producer and fails the conversion.
    pub fn resolve(snapshot_type: SnapshotType, unaligned: bool) -> Result<Self> {
        if let SnapshotType::Savepoint { synchronous, .. } = snapshot_type {
            if unaligned {
                bail!("savepoints do not support unaligned checkpoints");
            }
            return Ok(if synchronous {
                Self::SyncSavepoint
            } else {
                Self::Savepoint
            });
        }
        if unaligned {
            return Ok(Self::UnalignedCheckpoint);
        }
        Ok(Self::Checkpoint)
    }
}
