//! Log backend setup. Output goes to stderr; stdout carries frame output.

use env_logger::{Builder, Env};

/// Environment variable holding the filter (`info`, `orrery_sim=trace`, ...).
pub const LOG_ENV: &str = "ORRERY_LOG";

/// Builder reading its filter from `var`, defaulting to `info`.
fn builder_from(var: &str) -> Builder {
    Builder::from_env(Env::new().filter_or(var, "info"))
}

/// Install the logger with its filter taken from `ORRERY_LOG`.
pub fn init_from_env() -> Result<(), log::SetLoggerError> {
    builder_from(LOG_ENV).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_filter_defaults_to_info() {
        let logger = builder_from("ORRERY_LOG_TEST_UNSET").build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn test_filter_read_from_variable() {
        std::env::set_var("ORRERY_LOG_TEST_DEBUG", "debug");
        let logger = builder_from("ORRERY_LOG_TEST_DEBUG").build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        std::env::set_var("ORRERY_LOG_TEST_MODULE", "warn,orrery_sim=trace");
        let logger = builder_from("ORRERY_LOG_TEST_MODULE").build();
        assert_eq!(logger.filter(), LevelFilter::Trace);
    }
}
