use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Picks the filters for a run. `RUST_LOG`, when set, takes over entirely;
/// otherwise only the crate's own events are shown, and only with `--verbose`.
fn filters(verbose: bool, env_filter: Option<EnvFilter>) -> (Option<Targets>, EnvFilter) {
    if let Some(env_filter) = env_filter {
        return (None, env_filter);
    }

    let (level_filter, level) = if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::OFF, "off")
    };
    let app_filter = Targets::new().with_target("navcheck", level_filter);
    (Some(app_filter), EnvFilter::new(level))
}

/// Logs go to stderr so stdout only ever carries the report path.
pub fn init_logging(verbose: bool) {
    let (app_filter, env_filter) = filters(verbose, EnvFilter::try_from_default_env().ok());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_quiet_without_verbose_or_env() {
        let (app_filter, _) = filters(false, None);
        let app_filter = app_filter.expect("crate target filter");
        assert!(!app_filter.would_enable("navcheck", &Level::ERROR));
    }

    #[test]
    fn test_verbose_enables_crate_debug() {
        let (app_filter, _) = filters(true, None);
        let app_filter = app_filter.expect("crate target filter");
        assert!(app_filter.would_enable("navcheck::core", &Level::DEBUG));
        assert!(!app_filter.would_enable("reqwest", &Level::DEBUG));
    }

    #[test]
    fn test_rust_log_drops_crate_target_filter() {
        for verbose in [false, true] {
            let (app_filter, env_filter) = filters(verbose, Some(EnvFilter::new("debug")));
            assert!(app_filter.is_none());
            assert_eq!(env_filter.max_level_hint(), Some(LevelFilter::DEBUG));
        }
    }
}
