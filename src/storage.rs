use crate::export::ExportError;
use crate::models::DateRange;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub fn archive_file_name(range: DateRange) -> String {
    format!("temperature_data_{}_{}.xml", range.start, range.end)
}

/// Writes an exported document into the archive directory, replacing an
/// earlier export of the same week.
pub async fn persist_export(dir: &Path, range: DateRange, xml: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(archive_file_name(range));
    fs::write(&path, xml).await?;
    info!(path = %path.display(), "archived xml export");
    Ok(path)
}
