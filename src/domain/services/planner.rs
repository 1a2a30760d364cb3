//! Export planner
//!
//! Pure computation of the render tasks a profile requires for a given set
//! of enumerated sources. No I/O: existence checks happen in the use case.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{IconSource, RenderTask};
use crate::domain::value_objects::{IconProfile, SizeSelector};

/// Tasks for one bucket, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPlan {
    pub name: String,
    /// Directory ensured before any task of this bucket runs
    pub directory: PathBuf,
    pub tasks: Vec<RenderTask>,
}

/// A pass that could not run for a bucket because the size index is out of range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPass {
    pub bucket: String,
    pub source_dir: PathBuf,
    pub index: usize,
    pub available: usize,
}

/// A task dropped because an earlier task already targets its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTask {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// The full cross product of sources, buckets and sizes for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPlan {
    pub buckets: Vec<BucketPlan>,
    pub skipped: Vec<SkippedPass>,
    pub duplicates: Vec<DuplicateTask>,
}

impl ExportPlan {
    pub fn task_count(&self) -> usize {
        self.buckets.iter().map(|b| b.tasks.len()).sum()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &RenderTask> {
        self.buckets.iter().flat_map(|b| b.tasks.iter())
    }
}

/// Plan every render task of `profile`.
///
/// `sources[i]` holds the enumerated sources of `profile.passes()[i]`.
/// Iteration order is bucket, then pass, then size, then source. A destination
/// produced twice in one plan is only kept the first time; later claimants
/// land in [`ExportPlan::duplicates`].
pub fn plan_exports(
    profile: &IconProfile,
    output_dir: &Path,
    sources: &[Vec<IconSource>],
) -> ExportPlan {
    let layout = profile.layout();
    let mut plan = ExportPlan::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for bucket in profile.resolutions().buckets() {
        let mut tasks = Vec::new();

        for (pass, pass_sources) in profile.passes().iter().zip(sources) {
            let Some(sizes) = pass.sizes.select(&bucket.sizes) else {
                if let SizeSelector::Index(index) = pass.sizes {
                    plan.skipped.push(SkippedPass {
                        bucket: bucket.name.clone(),
                        source_dir: pass.source_dir.clone(),
                        index,
                        available: bucket.sizes.len(),
                    });
                }
                continue;
            };

            for size in sizes {
                for source in pass_sources {
                    let task = RenderTask::new(
                        source.clone(),
                        &bucket.name,
                        size,
                        &pass.output_suffix,
                        layout,
                        output_dir,
                    );
                    if seen.insert(task.destination().to_path_buf()) {
                        tasks.push(task);
                    } else {
                        plan.duplicates.push(DuplicateTask {
                            source: source.path().to_path_buf(),
                            destination: task.destination().to_path_buf(),
                        });
                    }
                }
            }
        }

        plan.buckets.push(BucketPlan {
            name: bucket.name.clone(),
            directory: layout.bucket_dir(output_dir, &bucket.name),
            tasks,
        });
    }

    plan
}
