#![cfg(feature = "std")]

use broadside::LogFilter;
use log::LevelFilter;

#[test]
fn test_default_level_is_info() {
    let filter = LogFilter::parse("");
    assert_eq!(filter.level_for("broadside::game"), LevelFilter::Info);
    assert_eq!(filter.level_for("broadside"), LevelFilter::Info);
    assert_eq!(filter.max_level(), LevelFilter::Info);
}

#[test]
fn test_module_overrides() {
    let filter = LogFilter::parse("warn, scanner=debug,turn=trace");
    assert_eq!(filter.level_for("broadside::scanner"), LevelFilter::Debug);
    assert_eq!(filter.level_for("broadside::turn"), LevelFilter::Trace);
    assert_eq!(filter.level_for("broadside::game"), LevelFilter::Warn);
    assert_eq!(filter.max_level(), LevelFilter::Trace);
}

#[test]
fn test_module_match_is_path_aware() {
    let filter = LogFilter::parse("error,board=debug");
    assert_eq!(filter.level_for("broadside::board"), LevelFilter::Debug);
    assert_eq!(filter.level_for("broadside::board::layout"), LevelFilter::Debug);
    assert_eq!(filter.level_for("broadside::boardwalk"), LevelFilter::Error);
}

#[test]
fn test_foreign_targets_are_silenced() {
    let filter = LogFilter::parse("trace");
    assert_eq!(filter.level_for("clap_builder::parser"), LevelFilter::Off);
    assert_eq!(filter.level_for("broadsides"), LevelFilter::Off);
}

#[test]
fn test_bad_entries_are_skipped() {
    let filter = LogFilter::parse("loud,scanner=shouty,game=debug");
    assert_eq!(filter.level_for("broadside::scanner"), LevelFilter::Info);
    assert_eq!(filter.level_for("broadside::game"), LevelFilter::Debug);
}
