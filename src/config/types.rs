//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Bucket, ExportLayout, IconProfile, RenderPass, ResolutionSpec, SizeSelector, BUILTIN_PROFILES,
};
use crate::error::{ContentKitError, ContentKitResult};
use crate::infrastructure::{DEFAULT_GIT, DEFAULT_RASTERIZER};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// External rasterizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterizerConfig {
    #[serde(default = "default_rasterizer")]
    pub command: String,

    /// Arguments placed before the input file
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            command: default_rasterizer(),
            args: Vec::new(),
        }
    }
}

fn default_rasterizer() -> String {
    DEFAULT_RASTERIZER.to_string()
}

/// Git configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_git")]
    pub command: String,

    /// Branch checked out in every submodule
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            command: default_git(),
            branch: default_branch(),
        }
    }
}

fn default_git() -> String {
    DEFAULT_GIT.to_string()
}

fn default_branch() -> String {
    crate::application::git_update::DEFAULT_BRANCH.to_string()
}

/// One `[[icons.<profile>.passes]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    pub source_dir: PathBuf,

    #[serde(default)]
    pub extension: Option<String>,

    #[serde(default)]
    pub strip_suffix: Option<String>,

    /// Zero-based index into each bucket's sizes; all sizes when absent
    #[serde(default)]
    pub size_index: Option<usize>,

    /// Appended to the base name of every output
    #[serde(default)]
    pub suffix: Option<String>,
}

impl PassConfig {
    fn to_pass(&self) -> RenderPass {
        let mut pass = RenderPass::new(&self.source_dir)
            .with_sizes(SizeSelector::from(self.size_index));
        if let Some(extension) = &self.extension {
            pass = pass.with_extension(extension);
        }
        if let Some(strip) = &self.strip_suffix {
            pass = pass.with_strip_suffix(strip);
        }
        if let Some(suffix) = &self.suffix {
            pass = pass.with_output_suffix(suffix);
        }
        pass
    }
}

/// `[icons.<profile>]` table
///
/// Overrides a built-in profile field by field, or defines a new profile.
/// `source_dir`, `extension` and `strip_suffix` adjust the first pass;
/// `passes` replaces the pass list outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub layout: Option<ExportLayout>,

    #[serde(default)]
    pub buckets: Option<Vec<Bucket>>,

    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    #[serde(default)]
    pub extension: Option<String>,

    #[serde(default)]
    pub strip_suffix: Option<String>,

    #[serde(default)]
    pub passes: Option<Vec<PassConfig>>,
}

impl ProfileConfig {
    /// Layer this table over `base` (a built-in profile), or build a new
    /// profile called `name` when there is no base.
    pub fn apply(&self, name: &str, base: Option<IconProfile>) -> ContentKitResult<IconProfile> {
        let mut profile = match base {
            Some(base) => base,
            None => {
                let output_dir =
                    self.output_dir
                        .clone()
                        .ok_or_else(|| ContentKitError::InvalidProfile {
                            name: name.to_string(),
                            message: "output_dir is required for a custom profile".to_string(),
                        })?;
                IconProfile::new(
                    name,
                    output_dir,
                    self.layout.unwrap_or(ExportLayout::Flat),
                    ResolutionSpec::new(),
                    Vec::new(),
                )
            }
        };

        if let Some(output_dir) = &self.output_dir {
            profile = profile.with_output_dir(output_dir);
        }
        if let Some(layout) = self.layout {
            profile = profile.with_layout(layout);
        }
        if let Some(buckets) = &self.buckets {
            profile = profile.with_resolutions(buckets.clone().into());
        }
        if let Some(passes) = &self.passes {
            profile = profile.with_passes(passes.iter().map(PassConfig::to_pass).collect());
        }

        if self.source_dir.is_some() || self.extension.is_some() || self.strip_suffix.is_some() {
            let passes = profile.passes_mut();
            if passes.is_empty() {
                let source_dir = self.source_dir.clone().unwrap_or_else(|| ".".into());
                passes.push(RenderPass::new(source_dir));
            }
            let first = &mut passes[0];
            if let Some(source_dir) = &self.source_dir {
                first.source_dir = source_dir.clone();
            }
            if let Some(extension) = &self.extension {
                first.extension = extension.clone();
            }
            if let Some(strip) = &self.strip_suffix {
                first.strip_suffix = (!strip.is_empty()).then(|| strip.clone());
            }
        }

        Ok(profile)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rasterizer: RasterizerConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub icons: BTreeMap<String, ProfileConfig>,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ContentKitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Find and load the configuration that applies in `cwd`
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ContentKitResult<LoadedConfig> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (CONTENTKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Built-in and configured profile names, sorted and deduplicated
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = BUILTIN_PROFILES.iter().map(|s| s.to_string()).collect();
        names.extend(self.icons.keys().cloned());
        names.sort();
        names.dedup();
        names
    }

    /// Resolve an icon profile by name, applying any `[icons.<name>]` table
    pub fn profile(&self, name: &str) -> ContentKitResult<IconProfile> {
        let base = IconProfile::builtin(name);
        let profile = match (self.icons.get(name), base) {
            (Some(table), base) => table.apply(name, base)?,
            (None, Some(base)) => base,
            (None, None) => {
                return Err(ContentKitError::UnknownProfile {
                    name: name.to_string(),
                    available: self.profile_names().join(", "),
                })
            }
        };
        profile.validate()?;
        Ok(profile)
    }
}
