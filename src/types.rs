use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Event time in milliseconds since epoch.
pub type EventTime = i64;

/// Unique identifier for checkpoints, monotonically increasing per job.
pub type CheckpointId = u64;

/// Sentinel for timestamps that have not been observed yet, e.g. the latest
/// acknowledgement timestamp before any subtask has acknowledged.
pub const UNSET_TIMESTAMP: EventTime = -1;

/// Unique identifier for a JobVertex (after chaining).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Vertex ids appear on the wire as string map keys under `tasks`, so they
// serialize as strings in every position.
impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for VertexId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u32>().map(VertexId).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_display() {
        assert_eq!(VertexId::new(7).to_string(), "7");
    }

    #[test]
    fn test_vertex_id_ordering() {
        let mut ids = vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]
        );
    }

    #[test]
    fn test_vertex_id_string_encoding_roundtrip() {
        let encoded = serde_json::to_string(&VertexId::new(7)).unwrap();
        assert_eq!(encoded, "\"7\"");
        let decoded: VertexId = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, VertexId::new(7));
    }

    #[test]
    fn test_vertex_id_rejects_non_numeric_key() {
        assert!(serde_json::from_str::<VertexId>("\"abc\"").is_err());
    }
}
