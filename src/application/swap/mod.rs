//! Swap Use Case
//!
//! Replaces the content of every same-named file beneath a root directory
//! with the content of one input file.

mod result;
mod use_case;

pub use result::{SwapAbort, SwapReport};
pub use use_case::SwapUseCase;
