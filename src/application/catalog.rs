//! Catalog service
//!
//! Loads the problem catalog from its TOML file and pairs entries with
//! solution files found in the solutions directory. Solution files follow
//! the `p<digits>_<slug>.rs` naming convention; the leading `p<digits>`
//! part is the problem id the catalog is keyed by.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Catalog;

/// Pairing of catalog entries with solution files on disk.
#[derive(Debug, Clone, Default)]
pub struct SolutionStatus {
    /// Catalog ids that have a solution file, with the file path
    pub solved: Vec<(String, PathBuf)>,
    /// Catalog ids without any solution file
    pub missing: Vec<String>,
    /// Solution files whose id has no catalog entry
    pub orphans: Vec<PathBuf>,
}

/// Service for catalog queries and solution-file discovery.
pub struct CatalogService {
    solution_regex: Regex,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            solution_regex: Regex::new(r"^(p\d{4})_[a-z0-9_]+\.rs$").unwrap(),
        }
    }

    /// Load the catalog from a TOML file.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Catalog> {
        let content = fs::read_to_string(path).with_path_context("read catalog", path)?;
        toml::from_str(&content).map_err(|e| ApplicationError::Config {
            message: format!("parse {}: {}", path.display(), e),
        })
    }

    /// Scan the solutions directory and pair files with catalog entries.
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn scan_solutions(
        &self,
        catalog: &Catalog,
        dir: &Path,
    ) -> ApplicationResult<SolutionStatus> {
        if !dir.is_dir() {
            return Err(ApplicationError::SolutionsDirMissing(dir.to_path_buf()));
        }

        let mut solved: BTreeMap<String, PathBuf> = BTreeMap::new();
        let mut orphans = Vec::new();

        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| ApplicationError::OperationFailed {
                context: format!("scan solutions: {}", dir.display()),
                source: Box::new(e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(caps) = self.solution_regex.captures(name) else {
                continue;
            };
            let id = caps[1].to_string();
            if catalog.get(&id).is_some() {
                solved
                    .entry(id)
                    .or_insert_with(|| entry.path().to_path_buf());
            } else {
                orphans.push(entry.path().to_path_buf());
            }
        }
        debug!(
            "scan: {} solved, {} orphan files in {}",
            solved.len(),
            orphans.len(),
            dir.display()
        );

        let missing = catalog
            .ids()
            .filter(|id| !solved.contains_key(*id))
            .map(str::to_string)
            .collect();
        orphans.sort();

        Ok(SolutionStatus {
            solved: solved.into_iter().collect(),
            missing,
            orphans,
        })
    }

    /// Locate the solution file for a problem id.
    #[instrument(level = "debug", skip(self))]
    pub fn solution_file(&self, dir: &Path, id: &str) -> ApplicationResult<PathBuf> {
        if !dir.is_dir() {
            return Err(ApplicationError::SolutionsDirMissing(dir.to_path_buf()));
        }
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if let Some(caps) = self.solution_regex.captures(name) {
                if &caps[1] == id {
                    return Ok(entry.path().to_path_buf());
                }
            }
        }
        Err(ApplicationError::SolutionMissing(id.to_string()))
    }
}
