use log::LevelFilter;

/// Maps the number of `-v` flags to a log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger. `RUST_LOG` overrides the verbosity flags.
pub fn init_logger(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    if let Err(err) = result {
        eprintln!("Logger already initialized: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
