//! IconProfile value object - one platform's icon export convention
//!
//! A profile bundles everything the exporter needs for one target platform:
//! where sources live, how base names are derived, which buckets and sizes
//! are required and how outputs are named. The three built-in profiles
//! reproduce the classic desktop, Android and iOS asset tables; configuration
//! can override them or add new ones without code changes.

use std::path::{Path, PathBuf};

use crate::error::{ContentKitError, ContentKitResult};

use super::export_layout::ExportLayout;
use super::resolution_spec::ResolutionSpec;

/// Names of the profiles that exist without any configuration
pub const BUILTIN_PROFILES: [&str; 3] = ["android", "desktop", "ios"];

/// Which of a bucket's sizes a render pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSelector {
    /// Every size of the bucket, in declared order
    #[default]
    All,
    /// Only the size at this position of the bucket's list
    Index(usize),
}

impl SizeSelector {
    /// Select sizes from a bucket. `None` when the bucket has no size at the index.
    pub fn select(&self, sizes: &[u32]) -> Option<Vec<u32>> {
        match self {
            SizeSelector::All => Some(sizes.to_vec()),
            SizeSelector::Index(i) => sizes.get(*i).map(|s| vec![*s]),
        }
    }
}

impl From<Option<usize>> for SizeSelector {
    fn from(index: Option<usize>) -> Self {
        index.map(SizeSelector::Index).unwrap_or_default()
    }
}

/// One source set rendered into every bucket of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass {
    /// Directory holding the vector sources (relative to the working root)
    pub source_dir: PathBuf,
    /// Source file extension, without the dot
    pub extension: String,
    /// Literal marker cut from file names to form the base name (e.g. `_24px`)
    pub strip_suffix: Option<String>,
    pub sizes: SizeSelector,
    /// Appended to the base name in the output file name (e.g. `_24dp`)
    pub output_suffix: String,
}

impl RenderPass {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: "svg".to_string(),
            strip_suffix: None,
            sizes: SizeSelector::All,
            output_suffix: String::new(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_strip_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.strip_suffix = (!suffix.is_empty()).then_some(suffix);
        self
    }

    pub fn with_sizes(mut self, sizes: SizeSelector) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }
}

/// A complete export convention for one target platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProfile {
    name: String,
    output_dir: PathBuf,
    layout: ExportLayout,
    resolutions: ResolutionSpec,
    passes: Vec<RenderPass>,
}

impl IconProfile {
    pub fn new(
        name: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        layout: ExportLayout,
        resolutions: ResolutionSpec,
        passes: Vec<RenderPass>,
    ) -> Self {
        Self {
            name: name.into(),
            output_dir: output_dir.into(),
            layout,
            resolutions,
            passes,
        }
    }

    /// Android drawables and app resources.
    ///
    /// Density icons (`AppIcons/*_24px.svg`) go out at each bucket's second
    /// size with a `_24dp` suffix; launcher icons (`Icons/*.svg`) at the
    /// fourth size without suffix.
    pub fn android() -> Self {
        let resolutions = ResolutionSpec::new()
            .with_bucket("drawable", [18, 24, 36, 48])
            .with_bucket("drawable-mdpi", [18, 24, 36, 48])
            .with_bucket("drawable-hdpi", [27, 36, 54, 72])
            .with_bucket("drawable-xhdpi", [36, 48, 72, 96])
            .with_bucket("drawable-xxhdpi", [54, 72, 108, 144])
            .with_bucket("drawable-xxxhdpi", [72, 96, 144, 192])
            .with_bucket("Resources", [18, 24, 36, 48])
            .with_bucket("Assets", [18, 24, 36, 48]);

        Self::new(
            "android",
            "AppIcons",
            ExportLayout::DensitySuffixed,
            resolutions,
            vec![
                RenderPass::new("AppIcons")
                    .with_strip_suffix("_24px")
                    .with_sizes(SizeSelector::Index(1))
                    .with_output_suffix("_24dp"),
                RenderPass::new("Icons")
                    .with_strip_suffix("_24px")
                    .with_sizes(SizeSelector::Index(3)),
            ],
        )
    }

    /// Desktop icons: one 512px raster next to each source.
    pub fn desktop() -> Self {
        Self::new(
            "desktop",
            "Icons",
            ExportLayout::Flat,
            ResolutionSpec::new().with_bucket("icons", [512]),
            vec![RenderPass::new("Icons")],
        )
    }

    /// iOS app icon sets: one directory per icon holding every required size.
    pub fn ios() -> Self {
        Self::new(
            "ios",
            "Icons",
            ExportLayout::PerIcon,
            ResolutionSpec::new().with_bucket(
                "appiconset",
                [20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024],
            ),
            vec![RenderPass::new("Icons")],
        )
    }

    /// Look up a built-in profile by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "android" => Some(Self::android()),
            "desktop" => Some(Self::desktop()),
            "ios" => Some(Self::ios()),
            _ => None,
        }
    }

    /// Reject profiles that could never produce an artifact.
    pub fn validate(&self) -> ContentKitResult<()> {
        let invalid = |message: String| ContentKitError::InvalidProfile {
            name: self.name.clone(),
            message,
        };

        if self.passes.is_empty() {
            return Err(invalid("no source passes declared".to_string()));
        }
        if self.resolutions.is_empty() {
            return Err(invalid("no buckets declared".to_string()));
        }
        for bucket in self.resolutions.buckets() {
            if bucket.name.trim().is_empty() {
                return Err(invalid("bucket with empty name".to_string()));
            }
            if bucket.sizes.iter().any(|s| *s == 0) {
                return Err(invalid(format!("bucket '{}' has a zero size", bucket.name)));
            }
        }
        for pass in &self.passes {
            if pass.extension.trim().is_empty() {
                return Err(invalid(format!(
                    "pass for {} has an empty extension",
                    pass.source_dir.display()
                )));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn layout(&self) -> ExportLayout {
        self.layout
    }

    pub fn resolutions(&self) -> &ResolutionSpec {
        &self.resolutions
    }

    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_layout(mut self, layout: ExportLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_resolutions(mut self, resolutions: ResolutionSpec) -> Self {
        self.resolutions = resolutions;
        self
    }

    pub fn with_passes(mut self, passes: Vec<RenderPass>) -> Self {
        self.passes = passes;
        self
    }

    /// Mutable access to the passes, for configuration overrides
    pub fn passes_mut(&mut self) -> &mut Vec<RenderPass> {
        &mut self.passes
    }
}
