//! Versioned checkpoint status wire records.
//!
//! These types are the monitoring contract: field names and discriminator
//! values are stable across engine versions and must not be renamed.

use crate::stats::{CheckpointStatsStatus, CheckpointStatsView, SnapshotType, TaskStateStats};
use crate::types::{CheckpointId, EventTime, VertexId};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod checkpoint_type;
mod statistics;
mod task_statistics;

pub use checkpoint_type::*;
pub use statistics::*;
pub use task_statistics::*;

#[cfg(test)]
#[path = "tests/rest_tests.rs"]
mod tests;
