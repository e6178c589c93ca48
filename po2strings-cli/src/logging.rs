use fern::Dispatch;
use log::LevelFilter;

/// Maps the number of `-v` flags to a level: warnings only, then info, then debug.
///
/// Commands that print diagnostics themselves start at errors only, so
/// conversion warnings are not reported twice.
pub fn level_for(verbosity: u8, reports_diagnostics: bool) -> LevelFilter {
    match verbosity {
        0 if reports_diagnostics => LevelFilter::Error,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Sends log records to stderr so converted output on stdout stays clean.
pub fn setup_logger(level: LevelFilter) {
    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let (color, reset) = match record.level() {
                log::Level::Error => ("\x1b[31m", "\x1b[0m"),
                log::Level::Warn => ("\x1b[33m", "\x1b[0m"),
                log::Level::Info | log::Level::Debug | log::Level::Trace => ("", ""),
            };
            out.finish(format_args!(
                "{}{}: {}{}",
                color,
                record.level(),
                if level >= LevelFilter::Debug {
                    format!("({}) {}", record.target(), message)
                } else {
                    message.to_string()
                },
                reset
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}
