use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run};

fn scenario_catalogs() -> Result<CliTest> {
    CliTest::with_catalogs(&[
        ("es", "common", json!({"hello": "Hola"})),
        ("en", "common", json!({})),
        ("pt", "common", json!({"hello": "Olá"})),
    ])
}

#[test]
fn test_reports_missing_key() -> Result<()> {
    let test = scenario_catalogs()?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @r#"
    Translation audit (base: es, targets: en, pt)

    [common]
      ✘ en: 1 missing key
          - hello: "Hola"

    Total missing keys: 1
    "#);

    Ok(())
}

#[test]
fn test_audit_flag_matches_audit_command() -> Result<()> {
    let test = scenario_catalogs()?;

    let via_flag = run(test.command().arg("--audit"))?;
    let via_command = run(&mut test.audit_command())?;

    assert_eq!(via_flag.code, Some(0));
    assert_eq!(via_flag.stdout, via_command.stdout);

    Ok(())
}

#[test]
fn test_audit_flag_accepts_audit_options() -> Result<()> {
    let test = scenario_catalogs()?;
    test.write_catalog("es", "docs", &json!({"title": "Documentación"}))?;

    let output = run(test
        .command()
        .args(["--audit", "--namespace", "common", "--strict"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.contains("[common]"));
    assert!(!output.stdout.contains("[docs]"));

    Ok(())
}

#[test]
fn test_audit_flag_reads_locales_root_env() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/es/common.json", r#"{"hello": "Hola"}"#)?;
    test.write_file("i18n/en/common.json", r#"{"hello": "Hello"}"#)?;
    test.write_file("i18n/pt/common.json", r#"{"hello": "Olá"}"#)?;

    let output = run(test
        .command()
        .env("TRANSCHECK_LOCALES_ROOT", "i18n")
        .arg("--audit"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("✓ All translations are complete"));

    Ok(())
}

#[test]
fn test_all_synchronized() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("es", "common", json!({"hello": "Hola", "nav": {"home": "Inicio"}})),
        ("en", "common", json!({"hello": "Hello", "nav": {"home": "Home"}})),
        ("pt", "common", json!({"hello": "Olá", "nav": {"home": "Início"}})),
        ("es", "docs", json!({"title": "Documentación"})),
        ("en", "docs", json!({"title": "Documentation"})),
        ("pt", "docs", json!({"title": "Documentação"})),
    ])?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ All translations are complete (2 namespaces checked, base: es, targets: en, pt)\n"
    );

    Ok(())
}

#[test]
fn test_missing_file_and_long_preview() -> Result<()> {
    let long_value = "Este es un texto de ejemplo bastante largo para el pie de página";
    let test = CliTest::with_catalogs(&[
        ("es", "common", json!({"footer": long_value, "title": "Inicio"})),
        ("en", "common", json!({"title": "Home"})),
    ])?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @r#"
    Translation audit (base: es, targets: en, pt)

    [common]
      ✘ en: 1 missing key
          - footer: "Este es un texto de ejemplo bastante largo para el..."
      ✘ pt: catalog file missing (2 keys missing)

    Total missing keys: 3
    "#);

    Ok(())
}

#[test]
fn test_namespace_filter() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("es", "common", json!({"a": "1"})),
        ("es", "docs", json!({"b": "2"})),
        ("en", "docs", json!({"b": "2"})),
        ("pt", "docs", json!({"b": "2"})),
    ])?;

    let output = run(test.audit_command().args(["--namespace", "docs.json"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("✓ All translations are complete (1 namespace checked"));

    Ok(())
}

#[test]
fn test_strict_fails_on_missing_keys() -> Result<()> {
    let test = scenario_catalogs()?;

    let output = run(test.audit_command().arg("--strict"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.contains("Total missing keys: 1"));

    Ok(())
}

#[test]
fn test_strict_passes_when_synchronized() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("es", "common", json!({"a": "1"})),
        ("en", "common", json!({"a": "1"})),
        ("pt", "common", json!({"a": "1"})),
    ])?;

    let output = run(test.audit_command().arg("--strict"))?;
    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_missing_locales_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("error:"));
    assert!(output.stderr.contains("public/locales"));

    Ok(())
}

#[test]
fn test_malformed_target_does_not_abort() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("es", "common", json!({"a": "1", "b": "2"})),
        ("en", "common", json!({"a": "1", "b": "2"})),
    ])?;
    test.write_file("public/locales/pt/common.json", "{ \"a\": ")?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Total missing keys: 2"));

    Ok(())
}

#[test]
fn test_config_file_languages_and_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transcheckrc.json",
        r#"{
            "localesRoot": "i18n",
            "baseLanguage": "en",
            "languages": ["en", "de"]
        }"#,
    )?;
    test.write_file("i18n/en/app.json", r#"{"greeting": "Hello", "bye": "Bye"}"#)?;
    test.write_file("i18n/de/app.json", r#"{"greeting": "Hallo"}"#)?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @r#"
    Translation audit (base: en, targets: de)

    [app]
      ✘ de: 1 missing key
          - bye: "Bye"

    Total missing keys: 1
    "#);

    Ok(())
}

#[test]
fn test_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/es/common.json", r#"{"a": "1"}"#)?;
    test.write_file("translations/en/common.json", r#"{"a": "1"}"#)?;

    let output = run(test.audit_command().args([
        "--locales-root",
        "translations",
        "--languages",
        "es,en",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("✓ All translations are complete"));
    assert!(output.stdout.contains("targets: en)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcheckrc.json", r#"{ "baseLanguage": "fr" }"#)?;

    let output = run(&mut test.audit_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Base language 'fr'"));

    Ok(())
}

#[test]
fn test_repeated_runs_identical() -> Result<()> {
    let test = scenario_catalogs()?;

    let first = run(&mut test.audit_command())?;
    let second = run(&mut test.audit_command())?;

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.code, second.code);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("audit"));

    Ok(())
}
