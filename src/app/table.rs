use std::path::{Path, PathBuf};

use super::error::{AppError, Result};
use super::persist;

/// The in-memory grid and the path it was loaded from.
///
/// The grid is rectangular and its dimensions are fixed from load until the
/// next load. The path binding set at load time is reused by every save, so
/// a loaded table can always be written back without re-asking the user.
pub struct TableStore {
    grid: Vec<Vec<String>>,
    path: PathBuf,
}

impl TableStore {
    /// Load a CSV file, replacing nothing on failure: the caller keeps its
    /// previous table if this returns an error.
    pub fn load(path: &Path) -> Result<Self> {
        let grid = persist::read_csv(path)?;
        Ok(Self {
            grid,
            path: path.to_path_buf(),
        })
    }

    /// Write the whole grid back to the bound path.
    pub fn save(&self) -> Result<()> {
        persist::write_csv_atomic(&self.path, &self.grid)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&str> {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .ok_or(AppError::Index { row, col })
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: String) -> Result<()> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(AppError::Index { row, col })?;
        *cell = value;
        Ok(())
    }
}
