//! Configuration module for contentkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CONTENTKIT_*)
//! 3. Explicit `--config` file, else `./contentkit.toml`
//! 4. User config (<config dir>/contentkit/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, ENV_GIT, ENV_RASTERIZER, PROJECT_CONFIG_FILE};
pub use types::{Config, GitConfig, PassConfig, ProfileConfig, RasterizerConfig};
