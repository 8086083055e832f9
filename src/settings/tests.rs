use super::*;

use assert_matches::assert_matches;

use crate::error::Error;

#[test]
fn test_default_settings() {
    let settings = Settings::load([]).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.lists.is_empty());
}

#[test]
fn test_load_settings() {
    let settings = Settings::load([SourceFile::new("src/testing/assets/configs/lists.yaml").into()]).unwrap();
    assert_eq!(settings.lists.len(), 3);

    let emails = &settings.lists["emails"];
    assert_eq!(emails.delimiter.as_deref(), Some("@"));
    assert!(!emails.case_sensitive);
    assert_eq!(emails.patterns, vec!["*@anylocalpart.com", "someuser@*"]);
    assert!(emails.files.is_empty());

    let ips = &settings.lists["ips"];
    assert_eq!(ips.files, vec![PathBuf::from("src/testing/assets/patterns/ips.txt")]);
    assert_eq!(ips.options(), ListOptions::new(Some("."), false));

    let urls = &settings.lists["urls"];
    assert_eq!(urls.delimiter, None);
    assert!(urls.case_sensitive);
}

#[test]
fn test_load_settings_override() {
    let settings = Settings::load([
        SourceFile::new("src/testing/assets/configs/lists.yaml").into(),
        SourceFile::new("src/testing/assets/configs/override.toml").into(),
    ])
    .unwrap();

    let emails = &settings.lists["emails"];
    assert!(emails.case_sensitive);
    assert!(emails.patterns.contains(&"Admin@*".to_owned()));
    assert!(settings.lists.contains_key("ips"));
}

#[test]
fn test_load_settings_from_str() {
    let settings = Settings::load([Source::Str(
        r#"{"lists": {"ips": {"delimiter": ".", "patterns": ["10.*"]}}}"#.into(),
        FileFormat::Json,
    )])
    .unwrap();
    assert_eq!(settings.lists["ips"].patterns, vec!["10.*"]);
}

#[test]
fn test_optional_missing_file() {
    let settings = Settings::load([SourceFile::new("src/testing/assets/configs/missing.yaml")
        .required(false)
        .into()])
    .unwrap();
    assert!(settings.lists.is_empty());
}

#[test]
fn test_required_missing_file() {
    let result = Settings::load([SourceFile::new("src/testing/assets/configs/missing.yaml").into()]);
    assert_matches!(result, Err(Error::Config(_)));
}
