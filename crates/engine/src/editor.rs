//! Editor resolution.
//!
//! The editor is chosen by (in order of priority):
//! 1. `$VISUAL`
//! 2. `$EDITOR`
//! 3. `notepad` on Windows, `open -t` on macOS
//! 4. the first of [`CANDIDATES`] found on the search path
//! 5. [`FALLBACK`]

use crate::config::{EditorEnv, Platform};
use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// Editors probed on the search path, in order.
pub const CANDIDATES: [&str; 4] = ["nano", "vim", "vi", "emacs"];

/// Editor used when nothing else is available.
pub const FALLBACK: &str = "nano";

/// A program name plus the flags it must always receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Split a command line such as `code --wait` using shell quoting rules.
    ///
    /// Returns `None` for empty or unbalanced input.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = shlex::split(command)?.into_iter();
        let program = parts.next().filter(|p| !p.is_empty())?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Full argument list for opening `target`.
    #[must_use]
    pub fn args_for(&self, target: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(OsString::from)
            .chain(std::iter::once(target.as_os_str().to_owned()))
            .collect()
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Pick the editor to launch. Always yields a command.
#[must_use]
pub fn resolve_editor(env: &EditorEnv) -> EditorCommand {
    for (var, value) in [("VISUAL", &env.visual), ("EDITOR", &env.editor)] {
        if let Some(command) = value.as_deref().and_then(EditorCommand::parse) {
            log::debug!("editor from ${var}: {command}");
            return command;
        }
        if let Some(raw) = value {
            log::warn!("ignoring unparsable ${var}: {raw:?}");
        }
    }

    match env.platform {
        Platform::Windows => EditorCommand::new("notepad"),
        Platform::MacOs => EditorCommand {
            program: "open".to_string(),
            args: vec!["-t".to_string()],
        },
        Platform::Other => {
            if let Some(found) = CANDIDATES
                .iter()
                .find(|name| on_search_path(name, &env.search_path))
            {
                log::debug!("editor from search path: {found}");
                EditorCommand::new(*found)
            } else {
                log::debug!("no candidate editor on search path, using {FALLBACK}");
                EditorCommand::new(FALLBACK)
            }
        }
    }
}

fn on_search_path(name: &str, dirs: &[impl AsRef<Path>]) -> bool {
    dirs.iter().any(|dir| dir.as_ref().join(name).is_file())
}
