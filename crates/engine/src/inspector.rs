use crate::error::{EngineError, Result};
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line, word and character counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    /// Newline count, plus one for a non-empty unterminated last line.
    pub lines: usize,
    /// Maximal runs of non-whitespace.
    pub words: usize,
    /// Unicode scalar values, newlines included.
    pub chars: usize,
}

impl TextCounts {
    #[must_use]
    pub fn of(content: &str) -> Self {
        let bytes = content.as_bytes();
        let newlines = bytecount::count(bytes, b'\n');
        let unterminated = usize::from(!content.is_empty() && !content.ends_with('\n'));

        Self {
            lines: newlines + unterminated,
            words: content.split_whitespace().count(),
            chars: bytecount::num_chars(bytes),
        }
    }
}

/// Metadata report for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub counts: TextCounts,
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nFile Information for: {}", self.path.display())?;
        writeln!(f, "Size: {} bytes", self.size)?;
        writeln!(f, "Created: {}", self.created.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Modified: {}", self.modified.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Lines: {}", self.counts.lines)?;
        writeln!(f, "Words: {}", self.counts.words)?;
        writeln!(f, "Characters: {}\n", self.counts.chars)
    }
}

/// Collect size, timestamps and text counts for `path`.
///
/// # Errors
/// Returns [`EngineError::NotFound`] for a missing path, otherwise
/// metadata or read failures.
pub fn inspect_file(path: &Path) -> Result<FileInfo> {
    if !path.exists() {
        return Err(EngineError::NotFound(path.to_path_buf()));
    }

    let metadata_err = |source: std::io::Error| EngineError::Metadata {
        path: path.to_path_buf(),
        source,
    };
    let meta = fs::metadata(path).map_err(metadata_err)?;
    let modified: DateTime<Local> = meta.modified().map_err(metadata_err)?.into();
    let created = created_time(&meta).unwrap_or(modified);

    let bytes = fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(FileInfo {
        path: path.to_path_buf(),
        size: meta.len(),
        created,
        modified,
        counts: TextCounts::of(&content),
    })
}

/// Birth time where the filesystem records one, else the inode change time.
fn created_time(meta: &fs::Metadata) -> Option<DateTime<Local>> {
    if let Ok(created) = meta.created() {
        return Some(created.into());
    }
    change_time(meta)
}

#[cfg(unix)]
fn change_time(meta: &fs::Metadata) -> Option<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(meta.ctime(), nanos).map(|utc| utc.with_timezone(&Local))
}

#[cfg(not(unix))]
fn change_time(_meta: &fs::Metadata) -> Option<DateTime<Local>> {
    None
}
