//! End-to-end tests for the `FormEngine`: configuration, catalog and schema
//! files on disk, then visibility and extraction fill on the loaded schema.

mod common;

use common::extraction;
use consulat_forms::testing_utils::{init_test_logging, TestSchemaFactory};
use consulat_forms::visibility::visible_field_paths;
use consulat_forms::{FormEngine, FormEngineConfig, FormEngineError, SchemaError};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

struct EngineFixture {
    engine: FormEngine,
    temp_dir: TempDir,
}

impl EngineFixture {
    fn new() -> Self {
        init_test_logging();
        let temp_dir = tempfile::tempdir().unwrap();

        let catalog_path = temp_dir.path().join("aliases.toml");
        fs::write(
            &catalog_path,
            r#"
[aliases]
firstName = ["prenom", "first_name"]
lastName = ["nom", "last_name"]
nationality = ["nationality", "nationalite"]
passportNumber = ["passportNumber", "numero_passeport"]
phone = ["mobile", "telephone"]
"#,
        )
        .unwrap();

        let config_path = temp_dir.path().join("engine.toml");
        fs::write(
            &config_path,
            format!(
                "primary_locale = \"fr\"\ncatalog_path = {:?}\n",
                catalog_path.display().to_string()
            ),
        )
        .unwrap();

        let config = FormEngineConfig::load_from_file(&config_path).unwrap();
        let engine = FormEngine::new(config).unwrap();
        Self { engine, temp_dir }
    }

    fn write_schema(&self, name: &str, document: &serde_json::Value) -> std::path::PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
        path
    }
}

#[test]
fn test_load_schema_file_and_resolve_visibility() {
    let fixture = EngineFixture::new();
    let path = fixture.write_schema("request.json", &TestSchemaFactory::stored_document());
    let schema = fixture.engine.load_schema_file(&path).unwrap();

    assert!(schema.show_recap);
    assert_eq!(schema.field_count(), 6);

    let french = json!({"identity": {"nationality": "FR"}});
    let passport_path = "identity.passportNumber".to_string();
    assert!(!visible_field_paths(&schema, &french).contains(&passport_path));

    let gabonese = json!({"identity": {"nationality": "GA"}});
    let sections = fixture.engine.visible_sections(&schema, &gabonese);
    assert_eq!(sections.len(), 2);
    assert!(sections[0].field_paths().contains(&passport_path));
}

#[test]
fn test_fill_from_extraction_with_loose_keys() {
    let fixture = EngineFixture::new();
    let schema = fixture
        .engine
        .load_schema_value(TestSchemaFactory::stored_document())
        .unwrap();

    let mapping = fixture.engine.generate_mapping(&schema);
    assert_eq!(mapping.path_for("firstName"), Some("identity.prenom"));
    assert_eq!(mapping.path_for("phone"), Some("contact.mobile"));

    let mut form_data = json!({"contact": {"email": "awa@example.org"}});
    let written = fixture.engine.fill_from_extraction(
        &schema,
        &mut form_data,
        &extraction(json!({
            "Prenom": "Awa",
            "last_name": "Mba",
            "numero_passeport": "GA1234567",
            "telephone": "+241 01 23 45 67",
            "eye_color": "brown"
        })),
    );

    assert_eq!(written, 4);
    assert_eq!(
        form_data,
        json!({
            "contact": {"email": "awa@example.org", "mobile": "+241 01 23 45 67"},
            "identity": {"prenom": "Awa", "nom": "Mba", "passportNumber": "GA1234567"}
        })
    );
}

#[test]
fn test_parse_extraction_payload_then_fill() {
    let fixture = EngineFixture::new();
    let schema = fixture
        .engine
        .load_schema_value(TestSchemaFactory::stored_document())
        .unwrap();

    let payload = r#"{"firstName": "Awa", "nationality": "GA"}"#;
    let extracted = FormEngine::parse_extraction(payload).unwrap();
    let mut form_data = json!({});
    fixture
        .engine
        .fill_from_extraction(&schema, &mut form_data, &extracted);

    assert_eq!(
        form_data,
        json!({"identity": {"prenom": "Awa", "nationality": "GA"}})
    );
}

#[test]
fn test_invalid_schema_file_is_reported() {
    let fixture = EngineFixture::new();
    let path = fixture.write_schema(
        "broken.json",
        &json!({"sections": [{"id": "a.b", "fields": []}]}),
    );

    match fixture.engine.load_schema_file(&path) {
        Err(FormEngineError::Schema(SchemaError::InvalidSection(message))) => {
            assert!(message.contains("a.b"));
        }
        other => panic!("expected an invalid section error, got {other:?}"),
    }
}

#[test]
fn test_missing_catalog_file_fails_engine_creation() {
    init_test_logging();
    let temp_dir = tempfile::tempdir().unwrap();
    let config = FormEngineConfig {
        catalog_path: Some(temp_dir.path().join("missing.toml")),
        ..Default::default()
    };
    assert!(matches!(
        FormEngine::new(config),
        Err(FormEngineError::Config(_))
    ));
}

#[test]
fn test_strict_paths_from_config() {
    init_test_logging();
    let config = FormEngineConfig {
        strict_condition_paths: true,
        ..Default::default()
    };
    let engine = FormEngine::new(config).unwrap();

    let document = json!({
        "sections": [{
            "id": "identity",
            "fields": [{
                "id": "spouseName",
                "type": "text",
                "condition": {"fieldPath": "family.status", "operator": "equals", "value": "married"}
            }]
        }]
    });
    assert!(matches!(
        engine.load_schema_value(document),
        Err(FormEngineError::Schema(SchemaError::InvalidCondition { .. }))
    ));
}
