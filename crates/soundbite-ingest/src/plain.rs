use crate::IngestError;
use std::path::Path;

/// Read a plain-text transcript into an ordered sequence of lines.
pub fn read_plain_lines(path: &Path) -> Result<Vec<String>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}
