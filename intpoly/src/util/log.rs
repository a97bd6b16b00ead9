use log::{LevelFilter, SetLoggerError};
use simplelog::{Color, ColorChoice, ConfigBuilder, Level, TermLogger, TerminalMode};

/// Maps a verbosity (`0` to `3`) to a level filter.
pub fn level_of(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Logs go to stderr so that stdout only carries results.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Debug, Some(Color::Cyan))
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
