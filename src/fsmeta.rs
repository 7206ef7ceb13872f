//! Filesystem metadata access: the timestamp source for CFIDs.

use chrono::{DateTime, Local, NaiveDateTime};
use eyre::{Context, Result};
use log::debug;
use std::path::Path;
use std::time::SystemTime;

/// Read a file's creation time as local wall-clock time.
///
/// Falls back to the last-modification time on platforms or filesystems that
/// do not report a birth time. The generation pipeline does not distinguish
/// the two sources.
pub fn creation_time(path: &Path) -> Result<NaiveDateTime> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;

    let system_time = match metadata.created() {
        Ok(created) => created,
        Err(_) => {
            debug!(
                "birth time unavailable for {}, using modification time",
                path.display()
            );
            metadata
                .modified()
                .with_context(|| format!("failed to read mtime of {}", path.display()))?
        }
    };

    Ok(to_local(system_time))
}

fn to_local(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}

/// The context string for a file: its final path component.
///
/// Paths with no filename component (e.g. `/` or `..`) yield an empty
/// context and the composer omits the segment.
pub fn context_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
