//! Shared fixtures for unit and integration tests
//!
//! Compiled with the `test-utils` feature, which the dev build enables, so the
//! integration tests under `tests/` can use the same schemas.

use crate::mapping::AliasCatalog;
use crate::schema::types::{
    Condition, FieldDefinition, FieldType, FormSchema, JoinedDocument, LocalizedString, Section,
};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

pub struct TestSchemaFactory;

impl TestSchemaFactory {
    /// A consular registration request: identity, family situation with a
    /// spouse block shown only for married applicants, and a document upload
    /// section.
    pub fn consular_request() -> FormSchema {
        let mut schema = FormSchema::new()
            .with_section(
                Section::new("basic_info")
                    .with_title("fr", "Informations de base")
                    .with_field(
                        FieldDefinition::new("first_name", FieldType::Text)
                            .with_title("fr", "Prénom")
                            .with_title("en", "First name")
                            .required(),
                    )
                    .with_field(
                        FieldDefinition::new("last_name", FieldType::Text)
                            .with_title("fr", "Nom de famille")
                            .with_title("en", "Last name")
                            .required(),
                    )
                    .with_field(
                        FieldDefinition::new("birth_date", FieldType::Date)
                            .with_title("fr", "Date de naissance"),
                    )
                    .with_field(
                        FieldDefinition::new("contact_mail", FieldType::Email)
                            .with_title("fr", "Courriel"),
                    ),
            )
            .with_section(
                Section::new("family")
                    .with_title("fr", "Situation familiale")
                    .with_field(
                        FieldDefinition::new("marital_status", FieldType::Select)
                            .with_title("fr", "Situation matrimoniale")
                            .with_option("single", fr("Célibataire"))
                            .with_option("married", fr("Marié(e)")),
                    )
                    .with_field(
                        FieldDefinition::new("spouse_name", FieldType::Text)
                            .with_title("fr", "Conjoint(e)")
                            .with_condition(Condition::equals(
                                "family.marital_status",
                                json!("married"),
                            )),
                    ),
            )
            .with_section(
                Section::new("documents")
                    .with_title("fr", "Pièces justificatives")
                    .with_condition(Condition::is_not_empty("basic_info.last_name"))
                    .with_field(
                        FieldDefinition::new("passport_scan", FieldType::File)
                            .with_title("fr", "Passeport"),
                    ),
            );
        schema.add_joined_document(JoinedDocument {
            document_type: "passport".to_string(),
            label: fr("Passeport"),
            required: true,
        });
        schema
    }

    /// The stored-document form of a small schema, as the configuration
    /// backend serves it.
    pub fn stored_document() -> Value {
        json!({
            "sections": [
                {
                    "id": "identity",
                    "title": {"fr": "Identité", "en": "Identity"},
                    "fields": [
                        {"id": "prenom", "type": "text", "label": {"fr": "Prénom"}, "required": true},
                        {"id": "nom", "type": "text", "label": {"fr": "Nom"}, "required": true},
                        {"id": "nationality", "type": "select", "label": {"fr": "Nationalité"}},
                        {
                            "id": "passportNumber",
                            "type": "text",
                            "label": {"fr": "Numéro de passeport"},
                            "condition": {
                                "fieldPath": "identity.nationality",
                                "operator": "notEquals",
                                "value": "FR"
                            }
                        }
                    ]
                },
                {
                    "id": "contact",
                    "title": {"fr": "Coordonnées"},
                    "fields": [
                        {"id": "email", "type": "email", "label": {"fr": "Adresse e-mail"}},
                        {"id": "mobile", "type": "tel", "label": {"fr": "Téléphone portable"}}
                    ]
                }
            ],
            "showRecap": true
        })
    }

    /// A catalog small enough to reason about in assertions.
    pub fn small_catalog() -> AliasCatalog {
        AliasCatalog::new()
            .with_aliases("firstName", ["first_name", "prenom", "prénom", "given_name"])
            .with_aliases("lastName", ["last_name", "nom", "nom_de_famille", "surname"])
    }
}

fn fr(text: &str) -> LocalizedString {
    LocalizedString::single("fr", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_is_repeatable() {
        init_test_logging();
        init_test_logging();
        log::debug!("test logging initialised");
        assert!(INIT_LOGGING.is_completed());
    }

    #[test]
    fn test_consular_request_fixture() {
        let schema = TestSchemaFactory::consular_request();
        assert_eq!(schema.field_count(), 7);
        assert_eq!(schema.joined_documents.len(), 1);
    }
}
