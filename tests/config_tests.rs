use num_kernels::{Config, Error};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_toml_file_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kernels.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"

[trapezoid]
a = -1.0
b = 2.0
subintervals = 250
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json);
    assert_eq!(config.trapezoid.a, -1.0);
    assert_eq!(config.trapezoid.b, 2.0);
    assert_eq!(config.trapezoid.subintervals, 250);
    // Untouched sections keep their defaults.
    assert_eq!(config.sieve.max_bound, 100_000_000);
    assert!(config.validate().is_ok());
}

#[test]
fn loads_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kernels.json");
    fs::write(&path, r#"{ "sieve": { "max_bound": 1000 } }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.sieve.max_bound, 1000);
    assert!(config.sieve.check_bound(1000).is_ok());
    assert!(config.sieve.check_bound(1001).is_err());
}

#[test]
fn missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn invalid_file_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kernels.toml");
    fs::write(&path, "[trapezoid]\nsubintervals = 0\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    match config.validate() {
        Err(Error::Config { key, .. }) => {
            assert_eq!(key.as_deref(), Some("trapezoid.subintervals"))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
