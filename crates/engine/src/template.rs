use chrono::{DateTime, Local};
use std::fmt;

/// Initial content rules for newly created files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    #[default]
    Blank,
    Note,
    Todo,
    Memo,
}

impl Template {
    pub const ALL: [Self; 4] = [Self::Blank, Self::Note, Self::Todo, Self::Memo];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Note => "note",
            Self::Todo => "todo",
            Self::Memo => "memo",
        }
    }

    /// File body for this template, stamped with `now` where the rule needs it.
    #[must_use]
    pub fn render(self, now: DateTime<Local>) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Note => format!("# Note created on {}\n\n", now.format("%Y-%m-%d %H:%M:%S")),
            Self::Todo => "# To-Do List\n\n- [ ] Task 1\n- [ ] Task 2\n- [ ] Task 3\n".to_string(),
            Self::Memo => format!("MEMO\nDate: {}\nSubject: \n\n", now.format("%Y-%m-%d")),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
