//! Template management and embedded templates

pub mod embedded;
pub mod registry;
pub mod resolver;

pub use registry::{list_family, list_templates, template_info, TemplateInfo};
pub use resolver::{
    resolve, resolve_for, table, Fallback, Resolution, TemplateTable, DISPUTE_TABLE,
    NOT_FOUND_MESSAGE, REMEDY_TABLE, TRUST_TABLE,
};
