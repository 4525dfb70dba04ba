//! Read-only checkpoint statistics snapshot model.
//!
//! The checkpoint coordinator's statistics tracker owns the live, mutable
//! counterparts of these values. Translation to the wire format consumes one
//! internally-consistent snapshot per call and never mutates it; read
//! consistency is the tracker's responsibility.

use crate::types::{CheckpointId, EventTime, VertexId};
use serde::{Deserialize, Serialize};

mod properties;
mod snapshot;

pub use properties::*;
pub use snapshot::*;

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
