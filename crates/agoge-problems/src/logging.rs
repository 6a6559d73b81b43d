use log::LevelFilter;

/// Pick a level: explicit argument, then `RUST_LOG`, then `info`.
pub fn resolve_level(level: Option<&str>, env: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| env.and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install the env_logger backend. Safe to call more than once; returns
/// `false` if a logger was already installed.
pub fn init_logging(level: Option<&str>) -> bool {
    let env = std::env::var("RUST_LOG").ok();
    let log_level = resolve_level(level, env.as_deref());
    let installed = env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .try_init()
        .is_ok();
    if installed {
        log::info!("Logger initialized (level: {log_level})");
    }
    installed
}
