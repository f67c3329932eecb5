//! CSV output of projected tables

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::projection::Table;

/// Writes tables as UTF-8 CSV files into one output directory.
#[derive(Debug, Clone)]
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `table` to `file_name` inside the output directory, replacing
    /// any existing file. Returns the path written.
    pub fn write(&self, table: &Table, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        let file = File::create(&path)?;
        Self::write_to(table, file)?;
        info!("Wrote {} rows to {}", table.len(), path.display());
        Ok(path)
    }

    /// Write the header record followed by every row
    pub fn write_to<W: Write>(table: &Table, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(table.header())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
