use clap::ValueEnum;
use textfile_engine::Template;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTemplate {
    #[default]
    Blank,
    Note,
    Todo,
    Memo,
}

impl From<CliTemplate> for Template {
    fn from(value: CliTemplate) -> Self {
        match value {
            CliTemplate::Blank => Self::Blank,
            CliTemplate::Note => Self::Note,
            CliTemplate::Todo => Self::Todo,
            CliTemplate::Memo => Self::Memo,
        }
    }
}
