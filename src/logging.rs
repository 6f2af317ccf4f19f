#![cfg(feature = "std")]

use std::boxed::Box;
use std::env;
use std::string::String;
use std::vec::Vec;

use log::{LevelFilter, Metadata, Record};

const CRATE: &str = "broadside";

/// Per-module log levels parsed from `BROADSIDE_LOG`.
///
/// The value is a comma-separated list of `level` or `module=level` entries,
/// where `module` is a path inside this crate (`scanner`, `game`, ...).
/// `BROADSIDE_LOG=warn,scanner=debug` shows every sunk ship but only warnings
/// elsewhere. Records from other crates are never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    default: LevelFilter,
    modules: Vec<(String, LevelFilter)>,
}

impl LogFilter {
    /// Unparsable entries are skipped.
    pub fn parse(spec: &str) -> Self {
        let mut filter = LogFilter {
            default: LevelFilter::Info,
            modules: Vec::new(),
        };
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once('=') {
                Some((module, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        filter.modules.push((module.trim().into(), level));
                    }
                }
                None => {
                    if let Ok(level) = entry.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        filter
    }

    /// Level enabled for records logged under `target`.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        let Some(module) = module_of(target) else {
            return LevelFilter::Off;
        };
        self.modules
            .iter()
            .filter(|(prefix, _)| {
                module == prefix.as_str()
                    || module
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or(self.default, |&(_, level)| level)
    }

    /// Most verbose level any module asks for.
    pub fn max_level(&self) -> LevelFilter {
        self.modules
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

/// Path of `target` relative to this crate; empty for the crate root.
fn module_of(target: &str) -> Option<&str> {
    let rest = target.strip_prefix(CRATE)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix("::")
    }
}

/// Writes to stderr so log lines never interleave with the board on stdout.
struct StderrLogger {
    filter: LogFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match module_of(record.target()) {
            Some(module) if !module.is_empty() => {
                eprintln!("{:<5} {}: {}", record.level(), module, record.args())
            }
            _ => eprintln!("{:<5} {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger configured from `BROADSIDE_LOG`, `info` when
/// the variable is unset.
pub fn init_logging() {
    let filter = LogFilter::parse(&env::var("BROADSIDE_LOG").unwrap_or_default());
    let level = filter.max_level();
    let _ = log::set_boxed_logger(Box::new(StderrLogger { filter }))
        .map(|()| log::set_max_level(level));
}
