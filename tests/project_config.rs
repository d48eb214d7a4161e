//! Project configuration driving a rewrite.

use std::fs;

use serde_json::{json, Value};
use tempfile::TempDir;

use exportmirror::config::CONFIG_DIR;
use exportmirror::{minify_json, ErrorCode, MirrorConfig};

fn module_with(names: &[&str]) -> String {
    let body: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "type": "ExportNamedDeclaration",
                "specifiers": [],
                "source": null,
                "declaration": {
                    "type": "VariableDeclaration",
                    "kind": "const",
                    "declarations": [{
                        "type": "VariableDeclarator",
                        "id": { "type": "Identifier", "name": name },
                        "init": {
                            "type": "StringLiteral",
                            "value": name,
                            "extra": { "raw": format!("'{}'", name), "rawValue": name }
                        }
                    }]
                }
            })
        })
        .collect();
    json!({ "type": "Program", "sourceType": "module", "body": body }).to_string()
}

fn write_config(dir: &TempDir, content: &str) {
    let config_dir = dir.path().join(CONFIG_DIR);
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

#[test]
fn project_alphabet_and_start_are_used() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "alphabet = \"xy\"\nstart = 1\n");

    let config = MirrorConfig::load_from_project(dir.path()).unwrap();
    let output = minify_json(&module_with(&["A", "B", "C"]), &config).unwrap();

    let values: Vec<_> = output
        .report
        .replacements
        .iter()
        .map(|r| r.value.as_str())
        .collect();
    assert_eq!(values, vec!["y", "xx", "xy"]);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = MirrorConfig::load_from_project(dir.path()).unwrap();
    let output = minify_json(&module_with(&["A"]), &config).unwrap();

    assert_eq!(config, MirrorConfig::default());
    assert_eq!(output.report.get("A").unwrap().value, "a");
}

#[test]
fn quote_check_rejects_unsafe_alphabet() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "alphabet = \"ab'\"\nquote = \"single\"\n");

    let config = MirrorConfig::load_from_project(dir.path()).unwrap();
    let err = minify_json(&module_with(&["A"]), &config).unwrap_err();

    assert_eq!(err.error_code(), ErrorCode::Configuration);
}

#[test]
fn duplicate_symbols_are_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "alphabet = \"abca\"\n");

    let config = MirrorConfig::load_from_project(dir.path()).unwrap();
    let err = minify_json(&module_with(&["A"]), &config).unwrap_err();

    assert_eq!(err.error_code(), ErrorCode::Configuration);
}

#[test]
fn malformed_toml_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "alphabet = [");

    let err = MirrorConfig::load_from_project(dir.path()).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::Configuration);
}
