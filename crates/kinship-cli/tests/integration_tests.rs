//! Integration tests for kinship-cli
//!
//! These tests load record files from disk and run the commands end to end
//! through the library API.

use kinship_cli::cli::PersonArgs;
use kinship_cli::commands;
use kinship_cli::config::OutputFormat;
use kinship_cli::{CliError, Config, Formatter};
use kinship_graph::GraphError;
use serde_json::Value;
use std::path::{Path, PathBuf};

const RECORD: &str = r##"{
    "persons": [
        { "id": "dad", "gender": { "type": "http://gedcomx.org/Male" }, "principal": true },
        { "id": "mom", "gender": { "type": "http://gedcomx.org/Female" } },
        { "id": "kid", "gender": { "type": "http://gedcomx.org/Female" } },
        { "id": "aunt", "gender": { "type": "http://gedcomx.org/Female" } }
    ],
    "relationships": [
        { "id": "c1", "type": "http://gedcomx.org/Couple", "person1": { "resource": "#mom" }, "person2": { "resource": "#dad" } },
        { "id": "pc1", "type": "http://gedcomx.org/ParentChild", "person1": { "resource": "#dad" }, "person2": { "resource": "#kid" } },
        { "id": "pc2", "type": "http://gedcomx.org/ParentChild", "person1": { "resource": "#mom" }, "person2": { "resource": "#kid" } },
        { "id": "au1", "type": "http://gedcomx.org/AuntOrUncle", "person1": { "resource": "#aunt" }, "person2": { "resource": "#kid" } },
        { "id": "bad", "type": "http://gedcomx.org/ParentChild", "person1": { "resource": "#ghost" }, "person2": { "resource": "#kid" } }
    ]
}"##;

fn write_record(dir: &Path) -> PathBuf {
    let path = dir.join("record.json");
    std::fs::write(&path, RECORD).unwrap();
    path
}

#[test]
fn test_summary_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(dir.path());
    let config = Config::default().graph_config(Some("t".to_string()), false);

    let graph = commands::load_graph(&path, &config).unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);
    let summary: Value = serde_json::from_str(&commands::execute_summary(&graph, &formatter).unwrap()).unwrap();

    assert_eq!(summary["persons"], 4);
    assert_eq!(summary["families"], 1);
    assert_eq!(summary["principals"], 1);
    assert_eq!(summary["relatives"], 2);
}

#[test]
fn test_strict_flag_fails_on_unknown_person() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(dir.path());
    let config = Config::default().graph_config(None, true);

    let result = commands::load_graph(&path, &config);
    assert!(matches!(
        result,
        Err(CliError::Graph(GraphError::InvalidReference { .. }))
    ));
}

#[test]
fn test_person_relatives() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(dir.path());
    let config = Config::default().graph_config(Some("t".to_string()), false);
    let graph = commands::load_graph(&path, &config).unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);

    let args = PersonArgs {
        file: path.clone(),
        id: "kid".to_string(),
    };
    let kid: Value = serde_json::from_str(&commands::execute_person(&args, &graph, &formatter).unwrap()).unwrap();
    assert_eq!(kid["parent_families"][0], "t:dad+mom");
    assert_eq!(kid["relatives"][0]["label"], "Aunt");
    assert_eq!(kid["relatives"][0]["person"], "aunt");

    let args = PersonArgs {
        file: path,
        id: "aunt".to_string(),
    };
    let aunt: Value = serde_json::from_str(&commands::execute_person(&args, &graph, &formatter).unwrap()).unwrap();
    assert_eq!(aunt["relatives"][0]["label"], "Niece");
}

#[test]
fn test_families_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_record(dir.path());
    let config = Config::default().graph_config(Some("t".to_string()), false);
    let graph = commands::load_graph(&path, &config).unwrap();
    let formatter = Formatter::new(OutputFormat::Table, false);

    let output = commands::execute_families(&graph, &formatter).unwrap();
    assert!(output.contains("t:dad+mom"));
    assert!(output.contains("kid"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = commands::load_graph(&dir.path().join("none.json"), &Default::default());
    assert!(matches!(result, Err(CliError::Graph(GraphError::Io(_)))));
}

#[test]
fn test_config_file_drives_graph_settings() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
        [settings]
        color = false

        [graph]
        chart_id = "from-config"

        [graph.relative_labels]
        AuntOrUncle = ["Uncle", "Auntie", "Aunt Or Uncle", "Nephew", "Niece", "Niece Or Nephew"]
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert!(!config.settings.color);

    let path = write_record(dir.path());
    let graph = commands::load_graph(&path, &config.graph_config(None, false)).unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);
    let args = PersonArgs {
        file: path,
        id: "kid".to_string(),
    };
    let kid: Value = serde_json::from_str(&commands::execute_person(&args, &graph, &formatter).unwrap()).unwrap();
    assert_eq!(kid["parent_families"][0], "from-config:dad+mom");
    assert_eq!(kid["relatives"][0]["label"], "Auntie");
}
