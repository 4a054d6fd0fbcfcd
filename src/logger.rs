use log::LevelFilter;

/// Maps the number of `-v` flags to a log level.
///
/// # Example
/// ```
/// use clips::logger::level_for;
/// use log::LevelFilter;
///
/// assert_eq!(level_for(0), LevelFilter::Warn);
/// assert_eq!(level_for(2), LevelFilter::Debug);
/// assert_eq!(level_for(9), LevelFilter::Trace);
/// ```
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger, writing `[LEVEL] [target] message` lines to
/// stderr so they never interleave with results on stdout.
///
/// # Errors
/// Fails if a global logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new().format(|out, message, record| {
                             out.finish(format_args!("[{:<5}] [{}] {}",
                                                     record.level(),
                                                     record.target(),
                                                     message));
                         })
                         .level(level)
                         .chain(std::io::stderr())
                         .apply()?;

    log::debug!("logger initialized at level {level}");
    Ok(())
}
