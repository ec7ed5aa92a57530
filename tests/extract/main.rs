use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use locext::{Language, PatternRegistry, StringExtractor, extractor_for};
use tempfile::TempDir;

mod markup;
mod registry;

pub struct ExtractTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl ExtractTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Extract from a project file with the bundled registry.
    pub fn extract(&self, path: &str) -> Result<Vec<String>> {
        self.extract_with(path, &PatternRegistry::builtin())
    }

    pub fn extract_with(&self, path: &str, registry: &PatternRegistry) -> Result<Vec<String>> {
        let extractor = extractor_for(Language::Swift, registry)?;
        extractor.extract_file(&self.root().join(path))
    }
}
