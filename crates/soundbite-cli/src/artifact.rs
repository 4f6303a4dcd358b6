use soundbite_core::Quote;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output artifact path: `quotes_<source stem>.json` in `out_dir`.
pub fn artifact_path(source: &Path, out_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    out_dir.join(format!("quotes_{stem}.json"))
}

/// Write the quote list as a pretty-printed JSON array, all-or-nothing.
///
/// The full document is serialized in memory, written to a temp file in
/// the target directory, then renamed into place; a failure on any path
/// leaves no partial artifact behind.
pub fn write_quotes(path: &Path, quotes: &[Quote]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(quotes)?;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
