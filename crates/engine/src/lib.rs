//! File lifecycle engine: editor resolution, templated creation,
//! viewing, inspection and editor launching.

// crates/engine/src/lib.rs
pub mod config;
pub mod creator;
pub mod editor;
pub mod error;
pub mod inspector;
pub mod launcher;
pub mod system;
pub mod template;
pub mod viewer;

pub use config::{EditorEnv, EditorEnvBuilder, Platform};
pub use creator::{CreateOutcome, create_file, create_file_at};
pub use editor::{EditorCommand, resolve_editor};
pub use error::{EngineError, Result};
pub use inspector::{FileInfo, TextCounts, inspect_file};
pub use launcher::{EditSession, EditTarget, open_in_editor, prepare_target};
pub use system::{StdinConfirmer, SystemSpawner};
pub use template::Template;
pub use viewer::{FileView, view_file};
