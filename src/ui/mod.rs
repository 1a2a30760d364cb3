//! Terminal and JSON presentation for the `contentkit` binary

pub mod console;
pub mod context;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
