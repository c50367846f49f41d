//! Configuration Tests.
//!
//! Verifies the JSON deserialization path the CLI uses, including
//! defaults filling in for omitted sections.

use vr4300_core::config::Config;

#[test]
fn default_config_boots_uncached() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0xFFFF_FFFF_A000_0000);
    assert!(!config.general.trace);
    assert_eq!(config.memory.rdram_size, 8 * 1024 * 1024);
}

#[test]
fn partial_json_uses_defaults_for_the_rest() {
    let config: Config =
        serde_json::from_str(r#"{ "general": { "trace": true } }"#).expect("valid config");
    assert!(config.general.trace);
    assert_eq!(config.general.start_pc, 0xFFFF_FFFF_A000_0000);
    assert_eq!(config.memory.rdram_size, 8 * 1024 * 1024);
}

#[test]
fn full_json_overrides_everything() {
    let text = r#"{
        "general": { "trace": false, "start_pc": 4 },
        "memory": { "rdram_size": 4194304, "rdram_base": 0 }
    }"#;
    let config: Config = serde_json::from_str(text).expect("valid config");
    assert_eq!(config.general.start_pc, 4);
    assert_eq!(config.memory.rdram_size, 4 * 1024 * 1024);
}
