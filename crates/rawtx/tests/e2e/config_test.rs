//! Configuration file handling as seen by the commands.

use rawtx::cli::commands::{load_config, NewCommand};
use rawtx_core::config::{Config, DEFAULT_BROADCAST_URL};
use rawtx_core::config_loader::ConfigLoader;
use rawtx_core::error::ErrorKind;

use crate::common::{new_args, temp_config};

#[test]
fn test_config_sets_chain_and_gas_defaults() {
    let (_dir, path) = temp_config(
        r#"
[network]
chain_id = 11155111

[defaults]
gas_price = "1000000000"
gas_limit = "50000"
"#,
    );
    let config = load_config(Some(&path)).unwrap();

    let mut args = new_args();
    args.gas_price = None;
    args.gas_limit = None;
    let signed = NewCommand::new(args).sign(&config).unwrap();

    assert_eq!(signed.chain_id(), Some(11_155_111));
    assert_eq!(signed.tx().gas_price().to::<u64>(), 1_000_000_000);
    assert_eq!(signed.tx().gas_limit().to::<u64>(), 50_000);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let (_dir, path) = temp_config("[network]\napi_key = \"KEY\"\n");
    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.network.chain_id, 1);
    assert_eq!(config.network.broadcast_url, DEFAULT_BROADCAST_URL);
    assert_eq!(config.network.api_key.as_deref(), Some("KEY"));
    assert_eq!(config.defaults, Config::default().defaults);
}

#[test]
fn test_invalid_config_is_config_error() {
    for contents in [
        "[network]\nchain_id = 0\n",
        "[defaults]\ngas_price = \"4 gwei\"\n",
        "[network]\ntimeout_secs = 0\n",
        "[unknown]\nkey = 1\n",
        "not toml at all [",
    ] {
        let (_dir, path) = temp_config(contents);
        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::ConfigError), "{contents:?}");
    }
}

#[test]
fn test_default_location_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    assert!(!loader.exists());
    assert_eq!(loader.load().unwrap(), Config::default());
}
