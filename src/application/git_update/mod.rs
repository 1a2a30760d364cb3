//! Git Update Use Case
//!
//! Initialises and merges submodules, then moves every submodule listed in
//! `.gitmodules` onto its tracking branch and pulls.

mod options;
mod result;
mod use_case;

pub use options::{GitUpdateOptions, DEFAULT_BRANCH};
pub use result::{GitFailure, GitUpdateReport};
pub use use_case::GitUpdateUseCase;
