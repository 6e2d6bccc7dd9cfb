pub mod condition;
pub mod errors;
pub mod field;
pub mod localized;
pub mod schema;
pub mod section;

pub use condition::{Condition, ConditionLogic, ConditionOperator, Conditional};
pub use errors::SchemaError;
pub use field::{FieldDefinition, FieldType, FieldValidation, SelectOption};
pub use localized::LocalizedString;
pub use schema::{FormSchema, JoinedDocument};
pub use section::Section;
