//! Loading configuration from disk.

use std::io::Write;

use gofield_core::{CollisionPolicy, Config, Error};

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[model]\non_path_collision = \"reject\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.model.on_path_collision, CollisionPolicy::Reject);
    assert_eq!(config.model.max_depth, 64);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("gofield.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_file_or_default(dir.path().join("gofield.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_error_has_span() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[model\n").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
}
