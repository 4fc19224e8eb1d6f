//! Terminal and OS process adapters for the ports.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::Command;
use textfile_ports::{Confirmer, ExitOutcome, ProcessSpawner};

/// Asks on stdout and reads the answer from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt} (y/n): ")?;
        stdout.flush()?;
        drop(stdout);

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

/// Only an explicit `y` counts as agreement.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Runs programs with [`std::process::Command`], inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<ExitOutcome> {
        let status = Command::new(program).args(args).status()?;
        Ok(ExitOutcome {
            code: status.code(),
            success: status.success(),
        })
    }
}
