//! Domain Services
//!
//! Stateless computations over domain types.

pub mod gitmodules;
pub mod planner;

pub use gitmodules::parse_submodule_paths;
pub use planner::{plan_exports, BucketPlan, DuplicateTask, ExportPlan, SkippedPass};
