//! Record emitters: CSV summary rows and full YAML detail.

use crate::error::Result;
use crate::git;
use crate::model::CommitRecord;
use anyhow::Context;
use std::io::{self, Write};
use std::path::Path;

pub const CSV_HEADER: [&str; 6] = [
    "Date",
    "Author",
    "Message",
    "Added",
    "Removed",
    "Files affected",
];

const DATE_RENDER: &str = "%Y-%m-%d %H:%M:%S";

/// Write one header row and one summary row per record. Messages are passed
/// through raw; the writer quotes fields with embedded separators or line
/// breaks.
pub fn write_csv<W: Write>(records: &[CommitRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(&[
            record.timestamp.format(DATE_RENDER).to_string(),
            record.author.clone(),
            record.message.clone(),
            record.total_added().to_string(),
            record.total_removed().to_string(),
            record.files_touched().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full ordered sequence, including per-file change detail.
pub fn write_yaml<W: Write>(records: &[CommitRecord], out: W) -> Result<()> {
    serde_yaml::to_writer(out, records)?;
    Ok(())
}

pub fn exec_csv(dir: &Path) -> anyhow::Result<()> {
    let records = git::log(dir).context("Failed to read repository history")?;
    write_csv(&records, io::stdout().lock()).context("Failed to write CSV")
}

pub fn exec_yaml(dir: &Path) -> anyhow::Result<()> {
    let records = git::log(dir).context("Failed to read repository history")?;
    write_yaml(&records, io::stdout().lock()).context("Failed to write YAML")
}
