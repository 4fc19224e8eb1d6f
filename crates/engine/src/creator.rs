use crate::error::{EngineError, Result};
use crate::template::Template;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use textfile_ports::Confirmer;

/// Result of a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The file existed and the user declined to overwrite it.
    Cancelled,
}

/// Create `path` from `template`, asking before overwriting an existing file.
///
/// # Errors
/// Returns an error if the parent directory or the file cannot be written,
/// or if the confirmation answer cannot be read.
pub fn create_file(
    path: &Path,
    template: Template,
    confirmer: &dyn Confirmer,
) -> Result<CreateOutcome> {
    create_file_at(path, template, confirmer, Local::now())
}

/// Same as [`create_file`] with an explicit timestamp for dated templates.
///
/// # Errors
/// See [`create_file`].
pub fn create_file_at(
    path: &Path,
    template: Template,
    confirmer: &dyn Confirmer,
    now: DateTime<Local>,
) -> Result<CreateOutcome> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::debug!("creating parent directories {}", parent.display());
        fs::create_dir_all(parent).map_err(|source| EngineError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if path.exists() {
        let prompt = format!("File '{}' already exists. Overwrite?", path.display());
        if !confirmer.confirm(&prompt).map_err(EngineError::Prompt)? {
            log::debug!("overwrite of {} declined", path.display());
            return Ok(CreateOutcome::Cancelled);
        }
    }

    fs::write(path, template.render(now)).map_err(|source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} using {template} template", path.display());

    Ok(CreateOutcome::Created)
}
