use std::sync::OnceLock;

use console::{Term, style};
use log::{Level, LevelFilter, Metadata, Record};

use crate::env;

#[derive(Debug)]
struct Logger {
    level: LevelFilter,
    term: Term,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.term.write_line(&render(record));
        }
    }

    fn flush(&self) {}
}

fn render(record: &Record) -> String {
    let prefix = match record.level() {
        Level::Error => style("ERROR").red().bold(),
        Level::Warn => style("WARN").yellow().bold(),
        Level::Info => style("plasmac-setup").dim(),
        Level::Debug => style("DEBUG").blue(),
        Level::Trace => style("TRACE").cyan(),
    };
    format!("{prefix} {}", record.args())
}

/// Install the stderr logger; `level` overrides PLASMAC_LOG
pub fn init(level: Option<LevelFilter>) {
    let level = level.unwrap_or(*env::PLASMAC_LOG);
    let logger = LOGGER.get_or_init(|| Logger {
        level,
        term: Term::stderr(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
