use recruit_kernel::config::{ConfigError, load_config};
use recruit_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
            [server]
            port = 8181

            [upstream]
            base_url = "https://backend.example.org"
            timeout_secs = 20

            [site]
            announcement = "Recruitment drive ends Friday"
        "#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8181);
    assert_eq!(cfg.upstream.base_url, "https://backend.example.org");
    assert_eq!(cfg.upstream.timeout_secs, Some(20));
    assert_eq!(cfg.site.announcement, "Recruitment drive ends Friday");
    assert_eq!(cfg.registration.referral_source, "Website");
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result: Result<ApiConfig, ConfigError> = load_config(Some(dir.path().join("absent.toml")));
    let err = result.expect_err("missing file must fail");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not-a-port\"\n")?;

    let result: Result<ApiConfig, ConfigError> = load_config(Some(&path));
    let err = result.expect_err("string port must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
