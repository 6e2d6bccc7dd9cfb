use crate::constants::PATH_SEPARATOR;
use crate::path_resolver::join_path;
use crate::schema::types::{Condition, SchemaError};
use crate::schema_interpreter::types::JsonFormSchema;
use log::warn;
use std::collections::HashSet;

pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates a stored form schema document.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - A section or field id is empty or contains `.`
    /// - Two sections share an id, or two fields of a section share an id
    /// - A condition has an empty `fieldPath`
    /// - `strict_paths` is set and a condition points at no field of the schema
    pub fn validate(
        schema: &JsonFormSchema,
        strict_paths: bool,
    ) -> crate::schema_interpreter::Result<()> {
        let mut section_ids = HashSet::new();
        let mut known_paths = HashSet::new();

        for section in &schema.sections {
            Self::validate_id(&section.id).map_err(|reason| {
                SchemaError::invalid_section(format!("'{}' {reason}", section.id))
            })?;
            if !section_ids.insert(section.id.as_str()) {
                return Err(SchemaError::DuplicateSection(section.id.clone()));
            }

            let mut field_ids = HashSet::new();
            for field in &section.fields {
                Self::validate_id(&field.id).map_err(|reason| {
                    SchemaError::invalid_field(format!("'{}.{}' {reason}", section.id, field.id))
                })?;
                if !field_ids.insert(field.id.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        section: section.id.clone(),
                        field: field.id.clone(),
                    });
                }
                known_paths.insert(join_path(&section.id, &field.id));
            }
        }

        for section in &schema.sections {
            let owner = format!("section '{}'", section.id);
            for condition in section.all_conditions() {
                Self::validate_condition(&owner, condition, &known_paths, strict_paths)?;
            }
            for field in &section.fields {
                let owner = format!("field '{}'", join_path(&section.id, &field.id));
                for condition in field.all_conditions() {
                    Self::validate_condition(&owner, condition, &known_paths, strict_paths)?;
                }
            }
        }

        Ok(())
    }

    fn validate_id(id: &str) -> Result<(), &'static str> {
        if id.trim().is_empty() {
            return Err("has an empty id");
        }
        if id.contains(PATH_SEPARATOR) {
            return Err("contains the path separator '.'");
        }
        Ok(())
    }

    fn validate_condition(
        owner: &str,
        condition: &Condition,
        known_paths: &HashSet<String>,
        strict_paths: bool,
    ) -> crate::schema_interpreter::Result<()> {
        if condition.field_path.trim().is_empty() {
            return Err(SchemaError::invalid_condition(owner, "fieldPath cannot be empty"));
        }

        if !condition.operator.is_known() {
            warn!(
                "Condition on {} uses unknown operator '{}'; it will always pass",
                owner, condition.operator
            );
        } else if condition.operator.requires_value() && condition.value.is_none() {
            warn!(
                "Condition on {} uses '{}' without a value",
                owner, condition.operator
            );
        }

        if !Self::references_known_field(&condition.field_path, known_paths) {
            if strict_paths {
                return Err(SchemaError::invalid_condition(
                    owner,
                    format!("fieldPath '{}' matches no field", condition.field_path),
                ));
            }
            warn!(
                "Condition on {} references '{}', which is not a field of this schema",
                owner, condition.field_path
            );
        }

        Ok(())
    }

    /// A path is known if it is a field path or points inside one
    /// (`address.home.city` under the `address.home` field).
    fn references_known_field(path: &str, known_paths: &HashSet<String>) -> bool {
        known_paths.contains(path)
            || path
                .match_indices(PATH_SEPARATOR)
                .any(|(index, _)| known_paths.contains(&path[..index]))
    }
}
