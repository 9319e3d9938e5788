// piispan-core/tests/config_integration_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

use piispan_core::config::{merge_config, ExtractionConfig};
use piispan_core::{EntityType, ExtractionEngine, SpecialTokenPolicy};

#[test]
fn test_load_default_config() {
    let config = ExtractionConfig::load_default().unwrap();
    assert!(config.labels.iter().any(|l| l == "B-PHONE"));
    assert_eq!(config.labels[0], "O");
    assert!(config.pii.is_pii(&EntityType::Email));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
labels:
  - O
  - B-ACCOUNT
  - I-ACCOUNT
  - B-PHONE
  - I-PHONE
pii:
  ACCOUNT: true
special_tokens: empty_range
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = ExtractionConfig::load_from_file(file.path())?;
    assert_eq!(config.labels.len(), 5);
    assert_eq!(config.special_token_policy(), SpecialTokenPolicy::EmptyRange);
    assert!(config.pii.is_pii(&EntityType::from("ACCOUNT")));
    // PHONE is not listed in this file's table.
    assert!(!config.pii.is_pii(&EntityType::Phone));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicate_labels() -> Result<()> {
    let yaml_content = r#"
labels: [O, B-PHONE, B-PHONE]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = ExtractionConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate label 'B-PHONE'"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_policy() -> Result<()> {
    let yaml_content = "special_tokens: sometimes\n";
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(ExtractionConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = ExtractionConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_pii_only_override_merges_over_defaults() -> Result<()> {
    let yaml_content = r#"
pii:
  DATE: false
  LOCATION: true
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let user = ExtractionConfig::load_from_file(file.path())?;
    assert!(user.labels.is_empty());

    let merged = merge_config(ExtractionConfig::load_default()?, Some(user));
    assert_eq!(merged.labels.len(), 15);
    assert!(!merged.pii.is_pii(&EntityType::Date));
    assert!(merged.pii.is_pii(&EntityType::from("LOCATION")));
    assert!(merged.pii.is_pii(&EntityType::Phone));
    assert_eq!(merged.special_token_policy(), SpecialTokenPolicy::ZeroSentinel);

    // The merged config still builds an engine.
    ExtractionEngine::new(merged)?;
    Ok(())
}

#[test]
fn test_engine_rejects_config_without_labels() {
    let config = ExtractionConfig::default();
    assert!(ExtractionEngine::new(config).is_err());
}
