use anyhow::{Context, Result};
use serde_json;
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

use super::Community;

/// Write `communities` to `path` as pretty JSON.
///
/// - creates the parent directory if needed
/// - writes to a hidden temp file next to `path`, then renames it over the target
pub fn write_communities<P: AsRef<Path>>(path: P, communities: &[Community]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating {:?}", dir))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("output path has no file name")?;
    let tmp_path = dir.join(format!(".{}.tmp", file_name));

    {
        let tmp = fs::File::create(&tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        let mut w = BufWriter::new(tmp);
        // pretty-print with a trailing newline
        serde_json::to_writer_pretty(&mut w, communities).context("serializing JSON")?;
        w.write_all(b"\n")?;
        w.flush()?;
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;

    info!(path = %path.display(), communities = communities.len(), "wrote JSON");
    Ok(())
}
