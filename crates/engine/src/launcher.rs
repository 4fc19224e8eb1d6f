use crate::config::EditorEnv;
use crate::creator::{CreateOutcome, create_file};
use crate::editor::{EditorCommand, resolve_editor};
use crate::error::{EngineError, Result};
use crate::template::Template;
use std::path::Path;
use textfile_ports::{Confirmer, ExitOutcome, ProcessSpawner};

/// State of the edit target once it is ready (or not) for an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Existing,
    /// The file was missing and has just been created blank.
    Created,
    /// The file was missing and the user declined to create it.
    Cancelled,
}

/// A finished editor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub editor: EditorCommand,
    pub exit: ExitOutcome,
}

/// Make sure `path` exists, creating it blank after confirmation.
///
/// # Errors
/// Returns an error if the confirmation cannot be read or the file
/// cannot be created.
pub fn prepare_target(path: &Path, confirmer: &dyn Confirmer) -> Result<EditTarget> {
    if path.exists() {
        return Ok(EditTarget::Existing);
    }

    if !confirmer
        .confirm("Would you like to create it?")
        .map_err(EngineError::Prompt)?
    {
        return Ok(EditTarget::Cancelled);
    }

    Ok(match create_file(path, Template::Blank, confirmer)? {
        CreateOutcome::Created => EditTarget::Created,
        CreateOutcome::Cancelled => EditTarget::Cancelled,
    })
}

/// Open `path` in the resolved editor and wait for it to exit.
///
/// # Errors
/// Returns [`EngineError::EditorSpawn`] when the editor fails to start.
pub fn open_in_editor(
    path: &Path,
    env: &EditorEnv,
    spawner: &dyn ProcessSpawner,
) -> Result<EditSession> {
    let editor = resolve_editor(env);
    log::debug!("launching {editor} on {}", path.display());

    let exit = spawner
        .run(&editor.program, &editor.args_for(path))
        .map_err(|source| EngineError::EditorSpawn {
            editor: editor.to_string(),
            source,
        })?;
    if !exit.success {
        log::warn!("editor {editor} exited with status {:?}", exit.code);
    }

    Ok(EditSession { editor, exit })
}
