use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .transcheckrc.json"));
    assert!(test.root().join(".transcheckrc.json").exists());

    let content = test.read_file(".transcheckrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesRoot"], "./public/locales");
    assert_eq!(parsed["baseLanguage"], "es");
    assert_eq!(parsed["languages"], serde_json::json!(["es", "en", "pt"]));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcheckrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("already exists"));
    assert_eq!(test.read_file(".transcheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_audit() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;
    test.write_file("public/locales/es/common.json", r#"{"a": "1"}"#)?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("catalog file missing"));

    Ok(())
}
