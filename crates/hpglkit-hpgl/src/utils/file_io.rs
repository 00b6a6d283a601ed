//! File I/O
//!
//! Loads HPGL job files into a [`Drawing`] and writes drawings back out
//! as HPGL or as an SVG preview.

use std::fs;
use std::path::{Path, PathBuf};

use hpglkit_core::{Drawing, HpglError, Result};
use tracing::{debug, info, warn};

use crate::hpgl::{to_hpgl, HpglParser, ParseOutcome};
use crate::svg::to_svg;

/// Files above this size get a warning before being read into memory
const LARGE_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// HPGL job file reader
#[derive(Debug, Clone)]
pub struct HpglFileReader {
    path: PathBuf,
    file_size: u64,
}

impl HpglFileReader {
    /// Open a job file
    ///
    /// # Errors
    /// Returns [`HpglError::LoadFailed`] if the path does not exist, is not
    /// a regular file, or its metadata cannot be read.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(load_failed(&path, "not a readable file").into());
        }

        let file_size = fs::metadata(&path)
            .map_err(|e| load_failed(&path, &e.to_string()))?
            .len();

        Ok(Self { path, file_size })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Read the whole file as text
    pub fn read_all(&self) -> Result<String> {
        if self.file_size > LARGE_FILE_BYTES {
            warn!(
                "Reading very large file ({}MB) into memory",
                self.file_size / (1024 * 1024)
            );
        }

        fs::read_to_string(&self.path)
            .map_err(|e| load_failed(&self.path, &e.to_string()).into())
    }

    /// Read and parse the file
    ///
    /// # Errors
    /// [`HpglError::EmptyInput`] if the file holds only whitespace.
    pub fn load(&self) -> Result<ParseOutcome> {
        let text = self.read_all()?;
        if text.trim().is_empty() {
            return Err(HpglError::EmptyInput {
                origin: self.path.display().to_string(),
            }
            .into());
        }

        let outcome = HpglParser::new().parse(&text);
        info!(
            "Loaded {} ({} bytes, {} paths)",
            self.path.display(),
            self.file_size,
            outcome.drawing.len()
        );
        Ok(outcome)
    }
}

fn load_failed(path: &Path, reason: &str) -> HpglError {
    HpglError::LoadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Load and parse an HPGL file
pub fn load_drawing(path: impl AsRef<Path>) -> Result<ParseOutcome> {
    HpglFileReader::new(path)?.load()
}

/// Write a drawing as HPGL
pub fn save_hpgl(path: impl AsRef<Path>, drawing: &Drawing) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_hpgl(drawing))?;
    debug!("Wrote HPGL to {}", path.display());
    Ok(())
}

/// Write an SVG preview of a drawing
pub fn save_svg(path: impl AsRef<Path>, drawing: &Drawing) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_svg(drawing))?;
    debug!("Wrote SVG preview to {}", path.display());
    Ok(())
}
