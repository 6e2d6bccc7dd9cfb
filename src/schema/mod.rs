pub mod types;

// Re-export all types at the schema module level
pub use types::{
    Condition,
    ConditionLogic,
    ConditionOperator,
    Conditional,
    FieldDefinition,
    FieldType,
    FieldValidation,
    FormSchema,
    JoinedDocument,
    LocalizedString,
    Section,
    SchemaError,
    SelectOption,
};
