use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CatalogError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter writing a rendered view to a file
///
/// Existing regular files are overwritten; a symbolic link at the target
/// path is refused.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> CatalogError {
        CatalogError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
    }

    /// Checks the target before anything is written
    fn check_target(&self) -> Result<()> {
        let parent = self
            .output_path
            .parent()
            .filter(|parent| *parent != Path::new(""));
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }

        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ View written to: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter printing a rendered view to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write view to stdout: {}", e))?;
        Ok(())
    }
}
