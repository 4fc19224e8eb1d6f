//! # Ports
//!
//! Interface definitions for the interactive and process-level
//! dependencies of the engine.
//!
//! - [`confirm`]: yes/no questions asked before destructive or creating actions
//! - [`process`]: launching an external program and waiting for it
//!
//! Keeping these behind traits lets the engine run against scripted
//! answers and fake spawners in tests.

// crates/ports/src/lib.rs
pub mod confirm;
pub mod process;

pub use confirm::Confirmer;
pub use process::{ExitOutcome, ProcessSpawner};
