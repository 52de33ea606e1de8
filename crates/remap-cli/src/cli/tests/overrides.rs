//! Tests for config overrides from command-line flags.

use super::parse;
use crate::cli::apply_overrides;
use remap_core::config::MigrationConfig;

#[test]
fn scan_overrides_prefix_and_suffix() {
    let mut cfg = MigrationConfig::default();
    let cmd = parse(&["remap", "scan", "--prefix", "https://n/", "--suffix", "-x"]);
    apply_overrides(&mut cfg, &cmd);
    assert_eq!(cfg.new_url_prefix, "https://n/");
    assert_eq!(cfg.new_url_suffix, "-x");
    assert_eq!(cfg.repair_suffix, "-1");
}

#[test]
fn repair_suffix_overrides_repair_suffix_only() {
    let mut cfg = MigrationConfig::default();
    let before = cfg.new_url_suffix.clone();
    apply_overrides(&mut cfg, &parse(&["remap", "repair", "--suffix", "-2"]));
    assert_eq!(cfg.repair_suffix, "-2");
    assert_eq!(cfg.new_url_suffix, before);
}

#[test]
fn other_commands_leave_config_alone() {
    let mut cfg = MigrationConfig::default();
    apply_overrides(&mut cfg, &parse(&["remap", "map"]));
    assert_eq!(cfg.new_url_prefix, MigrationConfig::default().new_url_prefix);
}
