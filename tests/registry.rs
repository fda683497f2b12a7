//! Integration tests for the registry surface: file loading, endpoint
//! resolution, and wiring validation, driven through the public API.

use std::fs;
use std::path::PathBuf;

use oft_cli::config::{load_config, ConfigError};
use oft_cli::{OftConfig, OftError};

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_example_registry_loads_and_validates() {
    let config = load_config(std::path::Path::new("oft.toml")).unwrap();

    assert_eq!(config.networks.len(), 2);
    assert_eq!(config.pathways.len(), 2);

    let sepolia = config.endpoint("sepolia-testnet").unwrap();
    assert_eq!(u32::from(sepolia.eid), 40161);

    let rootstock = config.endpoint("rootstock-testnet").unwrap();
    assert_eq!(u32::from(rootstock.eid), 40350);
}

#[test]
fn test_unknown_network_resolution_reports_configured_names() {
    let config = OftConfig::default();
    let err = config.endpoint("base-mainnet").unwrap_err();
    assert!(matches!(err, OftError::UnknownNetwork { .. }));
    let message = err.to_string();
    assert!(message.contains("base-mainnet"));
    assert!(message.contains("sepolia-testnet"));
    assert!(message.contains("rootstock-testnet"));
}

#[test]
fn test_wiring_referencing_missing_network_is_rejected() {
    let path = write_temp(
        "oft-cli-itest-bad-wiring.toml",
        r#"
        [networks.sepolia-testnet]
        eid = 40161
        rpc_url = "https://ethereum-sepolia-rpc.publicnode.com"

        [[pathways]]
        from = "sepolia-testnet"
        to = "rootstock-testnet"
        send_library = "0xcc1ae8Cf5D3904Cef3360A9532B477529b177cCE"
        receive_library = "0xdAf00F5eE2158dD58E0d3857851c432E34A3A851"
        executor = "0x718B92b5CB0a5552039B593faF724D182A881eDA"
        send_confirmations = 2
        receive_confirmations = 1
        required_dvns = ["0x8eebf8b423B73bFCa51a1Db4B7354AA0bFCA9193"]
        "#,
    );

    let result = load_config(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors
                .iter()
                .any(|e| e.message.contains("rootstock-testnet")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_empty_registry_is_rejected() {
    let path = write_temp("oft-cli-itest-empty.toml", "networks = {}\n");

    let result = load_config(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
