use crate::{FieldPersister, Value};
use std::sync::Arc;

/// Depth applied to foreign auto-refresh when the configuration leaves it
/// unspecified.
pub const DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL: u32 = 2;

/// Depth applied to eager foreign-collection fetches when the configuration
/// leaves it unspecified.
pub const MAX_EAGER_LEVEL: u32 = 1;

/// Declarative record for a scalar or foreign column, one field per
/// attribute of the persistence markup.
///
/// Name-like attributes follow annotation semantics: a blank string means
/// "not configured" and is normalized to absent during resolution.
#[derive(Debug, Clone)]
pub struct ColumnAttrs {
    pub column_name: String,
    /// Explicit logical type tag; `Value::Null` leaves the type to be
    /// inferred from the field declaration.
    pub data_type: Value,
    /// Custom persister overriding the tag-directed default.
    pub persister: Option<Arc<dyn FieldPersister>>,
    pub default_value: Option<String>,
    pub width: u32,
    pub can_be_null: bool,
    pub id: bool,
    pub generated_id: bool,
    pub generated_id_sequence: String,
    pub foreign: bool,
    pub use_get_set: bool,
    pub unknown_enum_name: String,
    pub throw_if_null: bool,
    pub persisted: bool,
    pub format: String,
    pub unique: bool,
    pub unique_combo: bool,
    pub index: bool,
    pub index_name: String,
    pub unique_index: bool,
    pub unique_index_name: String,
    pub foreign_auto_refresh: bool,
    /// `None` means unspecified; a default depth is substituted during
    /// postprocessing when auto-refresh ends up enabled.
    pub max_foreign_auto_refresh_level: Option<u32>,
    pub allow_generated_id_insert: bool,
    pub column_definition: String,
    pub foreign_auto_create: bool,
    pub version: bool,
    pub foreign_column_name: String,
    pub read_only: bool,
}

impl Default for ColumnAttrs {
    fn default() -> Self {
        Self {
            column_name: String::new(),
            data_type: Value::Null,
            persister: None,
            default_value: None,
            width: 0,
            can_be_null: true,
            id: false,
            generated_id: false,
            generated_id_sequence: String::new(),
            foreign: false,
            use_get_set: false,
            unknown_enum_name: String::new(),
            throw_if_null: false,
            persisted: true,
            format: String::new(),
            unique: false,
            unique_combo: false,
            index: false,
            index_name: String::new(),
            unique_index: false,
            unique_index_name: String::new(),
            foreign_auto_refresh: false,
            max_foreign_auto_refresh_level: None,
            allow_generated_id_insert: false,
            column_definition: String::new(),
            foreign_auto_create: false,
            version: false,
            foreign_column_name: String::new(),
            read_only: false,
        }
    }
}

/// Declarative record for a foreign collection field.
#[derive(Debug, Clone)]
pub struct ForeignCollectionAttrs {
    pub column_name: String,
    pub eager: bool,
    pub max_eager_level: u32,
    pub order_column_name: String,
    pub order_ascending: bool,
    /// Field on the related entity that points back at this one.
    pub foreign_field_name: String,
    /// Deprecated spelling of `foreign_field_name`; consulted only when the
    /// newer attribute is absent.
    pub foreign_column_name: String,
}

impl Default for ForeignCollectionAttrs {
    fn default() -> Self {
        Self {
            column_name: String::new(),
            eager: false,
            max_eager_level: MAX_EAGER_LEVEL,
            order_column_name: String::new(),
            order_ascending: true,
            foreign_field_name: String::new(),
            foreign_column_name: String::new(),
        }
    }
}
