// tests/common/mod.rs
//! Shared helpers for the binary tests.


#[allow(unused_imports)]
pub use temp::TempWorkspace;

use assert_cmd::Command;

/// The `textfile` binary with editor variables cleared.
pub fn textfile() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textfile"));
    cmd.env_remove("VISUAL")
        .env_remove("EDITOR")
        .env_remove("TEXTFILE_LOG");
    cmd
}
