use dashprice::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dashprice.toml");

    let config_toml = r#"
[server]
host = "0.0.0.0"
port = 8088

[price_source]
base_url = "https://prices.example.com"
token_address = "0x1234"
timeout_ms = 1500

[rate_limit]
enabled = true
requests_per_second = 10
burst_size = 20
"#;
    fs::write(&path, config_toml)?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.price_source.base_url, "https://prices.example.com");
    assert_eq!(settings.price_source.token_address, "0x1234");
    assert_eq!(settings.price_source.timeout_ms, 1500);

    let rate_limit = settings.rate_limit.expect("rate limit section");
    assert!(rate_limit.enabled);
    assert_eq!(rate_limit.requests_per_second, 10);
    assert_eq!(rate_limit.burst_size, 20);

    Ok(())
}

#[test]
fn test_partial_config_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dashprice.toml");

    fs::write(
        &path,
        r#"
[price_source]
token_address = "0xfeed"
"#,
    )?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.price_source.base_url, "https://api.pancakeswap.info");
    assert_eq!(settings.price_source.token_address, "0xfeed");
    assert_eq!(settings.price_source.timeout_ms, 5000);

    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dashprice.toml");

    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 0

[price_source]
base_url = "prices.example.com"
token_address = "0x1"
"#,
    )?;

    let err = Settings::from_file(&path).unwrap_err().to_string();
    assert!(err.contains("server.port"));
    assert!(err.contains("price_source.base_url"));

    Ok(())
}
