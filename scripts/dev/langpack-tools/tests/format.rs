use std::error::Error;
use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pack_dir(root: &Path, code: &str) -> std::path::PathBuf {
    root.join("app").join("language_pack").join(format!("values-{code}"))
}

#[test]
fn rewrites_templates_in_canonical_form() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let dir = pack_dir(root.path(), "zh-rCN");
    fs::create_dir_all(&dir)?;
    // Two-space indent, a stale non-template entry, and entities to normalise.
    fs::write(
        dir.join("template.xml"),
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
  <string name="old_key">stale</string>
  <string name="TPL_system_message">[系统信息]
{{Message}}</string>
</resources>
"#,
    )?;

    Command::cargo_bin("format-templates")?
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("filled TPL_battery from the built-in translation"))
        .stdout(predicate::str::contains("Formatted 1 language pack(s)"));

    let formatted = fs::read_to_string(dir.join("template.xml"))?;
    assert!(formatted.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n"));
    assert!(!formatted.contains("old_key"), "non-template entries are dropped");
    assert!(formatted.contains("    <string name=\"TPL_system_message\">[系统信息]\n{{Message}}</string>"));
    assert!(formatted.contains("[电池监控]"), "missing TPL_battery filled from the table");
    assert!(formatted.contains("[发送 USSD]"), "missing TPL_send_USSD_chat filled from the table");
    assert!(
        !formatted.contains("TPL_receiving_call"),
        "zh-rCN has no translation for TPL_receiving_call"
    );
    assert!(formatted.ends_with("</resources>\n"));
    Ok(())
}

#[test]
fn formatting_is_idempotent() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let dir = pack_dir(root.path(), "ja-rJP");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("template.xml"),
        "<resources><string name=\"TPL_system_message\">[システム情報]\n{{Message}}</string></resources>",
    )?;

    Command::cargo_bin("format-templates")?.arg(root.path()).assert().success();
    let first = fs::read(dir.join("template.xml"))?;
    Command::cargo_bin("format-templates")?.arg(root.path()).assert().success();
    assert_eq!(first, fs::read(dir.join("template.xml"))?);
    Ok(())
}

#[test]
fn packs_without_templates_are_skipped() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let dir = pack_dir(root.path(), "ru");
    fs::create_dir_all(&dir)?;
    let original = "<resources>\n    <string name=\"battery_low\">Батарея</string>\n</resources>\n";
    fs::write(dir.join("template.xml"), original)?;

    Command::cargo_bin("format-templates")?
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped: no templates found"));

    assert_eq!(fs::read_to_string(dir.join("template.xml"))?, original);
    Ok(())
}

#[test]
fn missing_pack_directories_are_reported() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("app/language_pack"))?;

    Command::cargo_bin("format-templates")?
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted 0 language pack(s)"))
        .stderr(predicate::str::contains("directory not found"));
    Ok(())
}
