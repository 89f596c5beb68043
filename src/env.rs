pub use std::env::*;
use std::{path::PathBuf, sync::LazyLock};

/// Root of the framework checkout, used when --plasmac-home is not given
pub static PLASMAC_HOME: LazyLock<Option<PathBuf>> = LazyLock::new(|| var_path("PLASMAC_HOME"));
pub static PLASMAC_LOG: LazyLock<log::LevelFilter> = LazyLock::new(|| {
    var_log_level("PLASMAC_LOG")
        .or(var_log_level("PLASMAC_LOG_LEVEL"))
        .unwrap_or(log::LevelFilter::Info)
});
pub static PLASMAC_TRACE: LazyLock<bool> = LazyLock::new(|| var_true("PLASMAC_TRACE"));

fn var_path(name: &str) -> Option<PathBuf> {
    var(name)
        .ok()
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

fn var_log_level(name: &str) -> Option<log::LevelFilter> {
    var(name).ok().and_then(|level| level.parse().ok())
}

fn var_true(name: &str) -> bool {
    var(name)
        .map(|val| val.to_lowercase())
        .map(|val| val == "true" || val == "1")
        .unwrap_or(false)
}
