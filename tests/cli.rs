use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn read_json(path: &std::path::Path) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn structures_a_translation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("kjv.json"),
        r#"[{"name":"Genesis","abbrev":"gn","chapters":[["In the beginning..."]]}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("structure-bible")?
        .current_dir(dir.path())
        .args(["kjv.json", "kjv", "King James Version"])
        .assert()
        .success()
        .stdout("Successfully structured King James Version (kjv)\n");

    let bible = dir.path().join("content").join("bible");
    assert_eq!(
        read_json(&bible.join("kjv").join("genesis.json"))?,
        json!({"name": "Genesis", "abbrev": "gn", "chapters": [["In the beginning..."]]})
    );
    assert_eq!(
        read_json(&bible.join("versions.json"))?,
        json!([{
            "id": "kjv",
            "name": "King James Version",
            "books": [{"name": "Genesis", "slug": "genesis", "abbrev": "gn", "chapters": 1}]
        }])
    );

    Ok(())
}

#[test]
fn keeps_other_versions() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let bible = dir.path().join("content").join("bible");
    fs::create_dir_all(&bible)?;
    fs::write(
        bible.join("versions.json"),
        r#"[{"id": "esv", "name": "ESV", "books": []}]"#,
    )?;
    fs::write(
        dir.path().join("arc.json"),
        r#"[{"name":"1 Reis","abbrev":"1rs","chapters":[["E, sendo o rei Davi já velho"]]}]"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("structure-bible")?
        .current_dir(dir.path())
        .args(["arc.json", "arc", "Almeida Revista e Corrigida"])
        .assert()
        .success();

    let versions = read_json(&bible.join("versions.json"))?;
    assert_eq!(versions[0], json!({"id": "esv", "name": "ESV", "books": []}));
    assert_eq!(versions[1]["books"][0]["slug"], "1reis");
    assert!(bible.join("arc").join("1reis.json").is_file());

    Ok(())
}

#[test]
fn missing_arguments_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("structure-bible")?
        .current_dir(dir.path())
        .arg("kjv.json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: structure-bible"));

    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn missing_input_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("structure-bible")?
        .current_dir(dir.path())
        .args(["missing.json", "kjv", "King James Version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));

    assert!(!dir.path().join("content").exists());
    Ok(())
}
