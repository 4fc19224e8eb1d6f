// crates/ports/src/process.rs
use std::ffi::OsString;
use std::io;

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, absent when the process was killed by a signal.
    pub code: Option<i32>,
    pub success: bool,
}

impl ExitOutcome {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            code: Some(0),
            success: true,
        }
    }

    #[must_use]
    pub const fn failure(code: i32) -> Self {
        Self {
            code: Some(code),
            success: false,
        }
    }
}

/// Port for spawning an external program and blocking until it exits.
pub trait ProcessSpawner {
    /// Run `program` with `args`, inheriting the terminal.
    ///
    /// # Errors
    /// Returns an error if the process could not be started or waited on.
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ExitOutcome>;
}
