//! Safe installation engine
//!
//! This module owns the conflict-detection, atomic-write, dry-run, and
//! partial-failure logic that governs how scaffolding files land on disk:
//! - [`catalog`]: the fixed install layout and pure path resolution
//! - [`scan`]: read-only detection of pre-existing install artifacts
//! - [`context`]: project context construction and legacy-file migration
//! - [`writer`]: atomic per-file writes
//! - [`planner`]: the run state machine tying the above together

pub mod catalog;
pub mod context;
pub mod planner;
pub mod scan;
pub mod writer;

pub use planner::{InstallPlanner, InstallRequest, RunReport, RunResult, WriteObserver};
pub use writer::WriteOutcome;
