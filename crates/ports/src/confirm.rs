// crates/ports/src/confirm.rs
use std::io;

/// Port for interactive yes/no confirmation.
pub trait Confirmer {
    /// Ask `prompt` and return `true` only on an affirmative answer.
    ///
    /// # Errors
    /// Returns an error when the answer cannot be read.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}
