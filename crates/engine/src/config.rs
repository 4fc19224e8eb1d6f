use derive_builder::Builder;
use std::env;
use std::path::PathBuf;

/// Desktop platform family, used to pick a default editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Windows,
    MacOs,
    #[default]
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Inputs to editor resolution, captured once per invocation.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct EditorEnv {
    /// Value of `VISUAL`, if set and non-empty.
    #[builder(default, setter(into, strip_option))]
    pub visual: Option<String>,
    /// Value of `EDITOR`, if set and non-empty.
    #[builder(default, setter(into, strip_option))]
    pub editor: Option<String>,
    #[builder(default = "Platform::current()")]
    pub platform: Platform,
    /// Directories searched for candidate editors, in `PATH` order.
    #[builder(default)]
    pub search_path: Vec<PathBuf>,
}

impl EditorEnv {
    /// Snapshot `VISUAL`, `EDITOR` and `PATH` from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        let search_path = env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();

        Self {
            visual: non_empty_var("VISUAL"),
            editor: non_empty_var("EDITOR"),
            platform: Platform::current(),
            search_path,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
