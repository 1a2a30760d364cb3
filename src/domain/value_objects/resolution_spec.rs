//! ResolutionSpec value object - bucket name to ordered pixel sizes

use serde::{Deserialize, Serialize};

/// A named output bucket (platform or density tier) and the sizes it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub sizes: Vec<u32>,
}

impl Bucket {
    pub fn new(name: impl Into<String>, sizes: impl Into<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            sizes: sizes.into(),
        }
    }
}

/// Ordered mapping of bucket name to pixel sizes.
///
/// Bucket order is preserved exactly as declared; exports run in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSpec {
    buckets: Vec<Bucket>,
}

impl ResolutionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bucket. A bucket with the same name replaces the earlier entry in place.
    pub fn with_bucket(mut self, name: impl Into<String>, sizes: impl Into<Vec<u32>>) -> Self {
        let bucket = Bucket::new(name, sizes);
        match self.buckets.iter_mut().find(|b| b.name == bucket.name) {
            Some(existing) => *existing = bucket,
            None => self.buckets.push(bucket),
        }
        self
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl From<Vec<Bucket>> for ResolutionSpec {
    fn from(buckets: Vec<Bucket>) -> Self {
        buckets
            .into_iter()
            .fold(Self::new(), |spec, b| spec.with_bucket(b.name, b.sizes))
    }
}
