use thiserror::Error;

/// Errors raised while loading or validating a form schema.
///
/// Evaluation and alias mapping never produce these; they only come out of
/// the schema interpreter when a stored document breaks the path contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Duplicate section key: {0}")]
    DuplicateSection(String),

    #[error("Duplicate field key '{field}' in section '{section}'")]
    DuplicateField { section: String, field: String },

    #[error("Invalid condition on {owner}: {reason}")]
    InvalidCondition { owner: String, reason: String },

    #[error("Invalid schema document: {0}")]
    InvalidDocument(String),
}

impl SchemaError {
    pub fn invalid_section(msg: impl Into<String>) -> Self {
        Self::InvalidSection(msg.into())
    }

    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    pub fn invalid_condition(owner: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCondition {
            owner: owner.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }
}
