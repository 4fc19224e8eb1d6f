use crate::error::{EngineError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Width of the right-aligned line index in numbered output.
pub const LINE_NUMBER_WIDTH: usize = 4;

/// Full contents of a file, split into lines for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub path: PathBuf,
    /// Lines with their terminating `\n` kept.
    pub lines: Vec<String>,
    pub line_numbers: bool,
}

impl FileView {
    #[must_use]
    pub fn new(path: PathBuf, content: &str, line_numbers: bool) -> Self {
        Self {
            path,
            lines: content.split_inclusive('\n').map(str::to_owned).collect(),
            line_numbers,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for FileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- {} ---\n", self.path.display())?;
        for (i, line) in self.lines.iter().enumerate() {
            if self.line_numbers {
                write!(f, "{:>width$} | ", i + 1, width = LINE_NUMBER_WIDTH)?;
            }
            f.write_str(line)?;
        }
        writeln!(f, "\n")?;
        writeln!(f, "--- End of file ({} lines) ---\n", self.line_count())
    }
}

/// Read `path` for display.
///
/// # Errors
/// Returns [`EngineError::NotFound`] for a missing path and
/// [`EngineError::FileRead`] when the file cannot be read.
pub fn view_file(path: &Path, line_numbers: bool) -> Result<FileView> {
    if !path.exists() {
        return Err(EngineError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(FileView::new(path.to_path_buf(), &content, line_numbers))
}
