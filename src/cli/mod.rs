mod args;
mod value_enum;

pub use args::{Cli, Command};
pub use value_enum::CliTemplate;
