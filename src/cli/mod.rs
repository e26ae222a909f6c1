//! Command-line surface for the `gwalk` binary.

pub mod commands;

use log::LevelFilter;

/// Log level for the CLI: debug with `--verbose`, warnings otherwise.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install a stderr logger. `RUST_LOG` still overrides the level.
pub fn init_logging(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(log_level(true), LevelFilter::Debug);
        assert_eq!(log_level(false), LevelFilter::Warn);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(true);
        init_logging(false);
        log::debug!("logger installed");
    }
}
