use super::*;

/// Format a savepoint was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavepointFormat {
    /// Portable format, restorable across engine versions.
    Canonical,
    /// State-backend specific format, faster but not portable.
    Native,
}

impl SavepointFormat {
    /// Wire-stable name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "CANONICAL",
            Self::Native => "NATIVE",
        }
    }
}

/// Rich internal snapshot type attached to a checkpoint when it is triggered.
///
/// The monitoring wire collapses this onto four stable tags; see
/// [`RestCheckpointType`](crate::rest::RestCheckpointType).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotType {
    /// Periodic fault-tolerance checkpoint.
    Checkpoint,
    /// User-triggered, externally durable snapshot.
    Savepoint {
        format: SavepointFormat,
        /// Whether the job was drained synchronously while taking it.
        synchronous: bool,
    },
}

impl SnapshotType {
    pub fn is_savepoint(&self) -> bool {
        matches!(self, Self::Savepoint { .. })
    }

    /// Declared format, if this snapshot type is a savepoint.
    pub fn savepoint_format(&self) -> Option<SavepointFormat> {
        match self {
            Self::Savepoint { format, .. } => Some(*format),
            Self::Checkpoint => None,
        }
    }
}

/// Properties a checkpoint was triggered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointProperties {
    pub snapshot_type: SnapshotType,
}

impl CheckpointProperties {
    pub fn checkpoint() -> Self {
        Self {
            snapshot_type: SnapshotType::Checkpoint,
        }
    }

    pub fn savepoint(format: SavepointFormat, synchronous: bool) -> Self {
        Self {
            snapshot_type: SnapshotType::Savepoint {
                format,
                synchronous,
            },
        }
    }

    pub fn is_savepoint(&self) -> bool {
        self.snapshot_type.is_savepoint()
    }
}
