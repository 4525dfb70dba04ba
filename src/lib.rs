//! # Riptide REST Messages
//!
//! Checkpoint monitoring wire types for the Riptide stream processing engine.
//!
//! Dashboards and operators poll checkpoint progress through a stable,
//! versioned JSON surface. This crate provides:
//!
//! - [`types`] — Shared identifiers: [`CheckpointId`](types::CheckpointId),
//!   [`EventTime`](types::EventTime), [`VertexId`](types::VertexId).
//! - [`stats`] — The read-only snapshot model produced by the checkpoint
//!   coordinator's statistics tracker, consumed here as an opaque source.
//! - [`rest`] — The wire records: [`CheckpointStatistics`](rest::CheckpointStatistics)
//!   and its per-task sibling, plus the snapshot translation that builds them.

pub mod rest;
pub mod stats;
pub mod types;
