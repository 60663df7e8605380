use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Logs go to stderr only: stdout is evaluated by the calling shell.
pub fn init_logging(debug_enabled: bool) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .add_filter_allow_str("direnv_tiny")
        .build();

    let level = level_for(debug_enabled);
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);

    log::debug!("Debug logging enabled");
}
