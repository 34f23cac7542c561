// Mon Oct 19 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs an `env_logger` backend. `RUST_LOG` still overrides `level`.
    /// Returns false when a logger was already installed.
    pub fn init_logger(level: LevelFilter) -> bool {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init()
            .is_ok()
    }

    pub fn init_for_tests() {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }
}
