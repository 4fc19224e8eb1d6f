use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use textfile_engine::{
    CreateOutcome, EditTarget, EditorEnv, EngineError, Template, create_file, inspect_file,
    open_in_editor, prepare_target, view_file,
};
use textfile_ports::{Confirmer, ProcessSpawner};

/// How a dispatched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The user declined a confirmation prompt.
    Cancelled,
    /// The operation failed and an `Error:` message was printed.
    Failed,
}

impl Status {
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success | Self::Cancelled => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Command dispatcher with its interactive and process capabilities.
pub struct App<'a> {
    confirmer: &'a dyn Confirmer,
    spawner: &'a dyn ProcessSpawner,
    env: EditorEnv,
}

impl<'a> App<'a> {
    pub fn new(
        confirmer: &'a dyn Confirmer,
        spawner: &'a dyn ProcessSpawner,
        env: EditorEnv,
    ) -> Self {
        Self {
            confirmer,
            spawner,
            env,
        }
    }

    /// Run one command, writing user-facing text to `out`.
    ///
    /// Without a command the help text is printed.
    ///
    /// # Errors
    /// Returns `Err` only when writing to `out` fails; operation failures
    /// are reported on `out` and mapped to [`Status::Failed`].
    pub fn dispatch<W: Write>(&self, command: Option<Command>, out: &mut W) -> Result<Status> {
        let Some(command) = command else {
            let help = Cli::command().render_help();
            write!(out, "{help}").context("failed to print help")?;
            return Ok(Status::Success);
        };
        log::debug!("dispatching {command:?}");

        let status = match command {
            Command::Create { file, template } => self.create(&file, template.into(), out),
            Command::Edit { file } => self.edit(&file, out),
            Command::View { file, line_numbers } => report(out, view_file(&file, line_numbers)),
            Command::Info { file } => report(out, inspect_file(&file)),
        };
        status.context("failed to write output")
    }

    fn create<W: Write>(
        &self,
        path: &Path,
        template: Template,
        out: &mut W,
    ) -> std::io::Result<Status> {
        match create_file(path, template, self.confirmer) {
            Ok(CreateOutcome::Created) => {
                writeln!(out, "File created: {}", path.display())?;
                Ok(Status::Success)
            }
            Ok(CreateOutcome::Cancelled) => cancelled(out),
            Err(e) => failed(out, &e),
        }
    }

    fn edit<W: Write>(&self, path: &Path, out: &mut W) -> std::io::Result<Status> {
        if !path.exists() {
            writeln!(out, "Error: {}", EngineError::NotFound(path.to_path_buf()))?;
            out.flush()?;
        }

        match prepare_target(path, self.confirmer) {
            Ok(EditTarget::Existing) => {}
            Ok(EditTarget::Created) => writeln!(out, "File created: {}", path.display())?,
            Ok(EditTarget::Cancelled) => return cancelled(out),
            Err(e) => return failed(out, &e),
        }

        match open_in_editor(path, &self.env, self.spawner) {
            Ok(session) => {
                log::debug!("{} exited with {:?}", session.editor, session.exit.code);
                writeln!(out, "File edited: {}", path.display())?;
                Ok(Status::Success)
            }
            Err(e) => failed(out, &e),
        }
    }
}

fn report<W: Write, T: std::fmt::Display>(
    out: &mut W,
    result: textfile_engine::Result<T>,
) -> std::io::Result<Status> {
    match result {
        Ok(value) => {
            write!(out, "{value}")?;
            Ok(Status::Success)
        }
        Err(e) => failed(out, &e),
    }
}

fn cancelled<W: Write>(out: &mut W) -> std::io::Result<Status> {
    writeln!(out, "Operation cancelled.")?;
    Ok(Status::Cancelled)
}

fn failed<W: Write>(out: &mut W, err: &EngineError) -> std::io::Result<Status> {
    log::debug!("operation failed: {err:?}");
    writeln!(out, "Error: {err}")?;
    Ok(Status::Failed)
}
