//! Mapping of AI-extracted document fields onto schema paths.

mod alias_mapper;
mod catalog;
mod extraction;

pub use alias_mapper::{
    generate_mapping, get_mappable_fields, invert_mapping, normalize_key, AliasMapper,
    FieldAliasMapping,
};
pub use catalog::AliasCatalog;
pub use extraction::{apply_extraction, merge_extraction, merge_extraction_loose};
