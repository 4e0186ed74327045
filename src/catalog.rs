use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use tokio::fs;
use tracing::{info, warn};

use crate::course::{Course, CourseId};

/// Ordered list of courses, kept in the order they were read.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let courses: Vec<Course> =
            serde_json::from_str(json).context("failed to parse course catalog json")?;
        Ok(Self { courses })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read course catalog {}", path.display()))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("invalid course catalog {}", path.display()))?;

        // repeated ids still render, the cards just can't be told apart by key
        for id in catalog.duplicate_ids() {
            warn!(%id, "duplicate course id in catalog");
        }
        info!(courses = catalog.courses.len(), "loaded catalog from {}", path.display());

        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn duplicate_ids(&self) -> Vec<CourseId> {
        self.courses.iter().map(|c| c.id).duplicates().collect()
    }
}
