//! The in-place file-swap ritual (spec.md §6, §7).
//!
//! Reads a file, formats it in memory, and -- only if the bytes actually
//! changed -- writes the result to a sibling temp file, copies over the
//! original's permissions, and renames the temp file over the original.
//! A file already in canonical form is left completely untouched: no
//! temp file, no rename, no mtime change (spec.md §8 property 7).

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CliError, Result};

pub fn format_in_place(path: &Path) -> Result<()> {
    let original = fs::read(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let original_text = String::from_utf8_lossy(&original);
    let formatted = tidyfmt_core::format_str(&original_text)?;

    if formatted.as_bytes() == original.as_slice() {
        debug!("{}: already canonical, leaving untouched", path.display());
        return Ok(());
    }

    let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let mut tmp = match tempfile::Builder::new().prefix(".tidyfmt_").tempfile_in(dir) {
        Ok(tmp) => tmp,
        Err(source) => {
            warn!("{}: could not create temp file: {source}", path.display());
            return Ok(());
        }
    };

    if let Err(source) = tmp.write_all(formatted.as_bytes()) {
        warn!("{}: could not write formatted output: {source}", path.display());
        return Ok(());
    }

    if let Ok(meta) = fs::metadata(path) {
        if let Err(source) = copy_permissions(tmp.path(), &meta) {
            warn!("{}: could not preserve permissions: {source}", path.display());
        }
    } else {
        warn!("{}: could not stat original for permission copy", path.display());
    }

    if let Err(persist_err) = tmp.persist(path) {
        warn!("{}: rename failed: {}", path.display(), persist_err.error);
    }

    Ok(())
}

#[cfg(unix)]
fn copy_permissions(tmp_path: &Path, meta: &fs::Metadata) -> std::io::Result<()> {
    fs::set_permissions(tmp_path, meta.permissions())
}

#[cfg(not(unix))]
fn copy_permissions(_tmp_path: &Path, _meta: &fs::Metadata) -> std::io::Result<()> {
    Ok(())
}
