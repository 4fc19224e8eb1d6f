use clap::Parser;
use std::io;
use std::process::ExitCode;
use textfile::app::App;
use textfile::cli::Cli;
use textfile::logging;
use textfile_engine::{EditorEnv, StdinConfirmer, SystemSpawner};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let app = App::new(&StdinConfirmer, &SystemSpawner, EditorEnv::from_process());
    match app.dispatch(cli.command, &mut io::stdout()) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
