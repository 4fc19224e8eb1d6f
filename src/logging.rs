use env_logger::{Builder, Env};

/// Environment variable holding the log filter, e.g. `TEXTFILE_LOG=debug`.
pub const LOG_ENV: &str = "TEXTFILE_LOG";
pub const LOG_STYLE_ENV: &str = "TEXTFILE_LOG_STYLE";

/// Install the stderr logger. Defaults to warnings only so stdout stays clean.
pub fn init() {
    let env = Env::new()
        .filter_or(LOG_ENV, "warn")
        .write_style(LOG_STYLE_ENV);

    // A second call (tests) keeps the first logger.
    let _ = Builder::from_env(env).format_timestamp(None).try_init();
}
