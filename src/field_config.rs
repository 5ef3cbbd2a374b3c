use crate::{
    AccessStrategy, ColumnAttrs, ConfigError, Dialect, FieldPersister, FieldView,
    ForeignCollectionAttrs, Result, SqlType, TableConfig, TagPersister, Value,
    attrs::{DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL, MAX_EAGER_LEVEL},
    persistence_adapter,
};
use anyhow::Context;
use std::sync::{Arc, OnceLock};

/// Canonical descriptor of one persistable field, merged from the
/// declarative sources that apply to it and defaulted by [`post_process`].
///
/// Built once per (entity type, field) while the table mapping is
/// constructed, then treated as read-only and shared freely across threads.
/// The lazily derived pieces (index names, the resolved persister) cache
/// behind [`OnceLock`]s so post-publication reads stay synchronization-free.
///
/// [`post_process`]: FieldConfig::post_process
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub field_name: String,
    /// Defaults to the field name when absent.
    pub column_name: Option<String>,
    /// Explicit logical type tag (`Value::Null` = not configured).
    pub data_type: Value,
    /// Type tag inferred from the field declaration (`Value::Null` =
    /// unknown).
    pub declared_type: Value,
    /// Custom persister overriding tag-directed conversion.
    pub persister: Option<Arc<dyn FieldPersister>>,
    /// String-encoded default, decoded on demand by [`parse_default`].
    ///
    /// [`parse_default`]: FieldConfig::parse_default
    pub default_value: Option<String>,
    pub width: u32,
    pub can_be_null: bool,
    pub id: bool,
    pub generated_id: bool,
    pub generated_id_sequence: Option<String>,
    pub foreign: bool,
    /// Injected table descriptor for foreign types that carry no
    /// declarative records of their own.
    pub foreign_table_config: Option<Arc<TableConfig>>,
    pub access: AccessStrategy,
    /// Validated variant name substituted for unrecognized enum values.
    pub unknown_enum_value: Option<String>,
    pub throw_if_null: bool,
    pub persisted: bool,
    /// Pattern for types with text-directed conversion (the date family).
    pub format: Option<String>,
    pub unique: bool,
    pub unique_combo: bool,
    pub index: bool,
    pub index_name: Option<String>,
    pub unique_index: bool,
    pub unique_index_name: Option<String>,
    pub foreign_auto_refresh: bool,
    pub max_foreign_auto_refresh_level: Option<u32>,
    pub allow_generated_id_insert: bool,
    pub column_definition: Option<String>,
    pub foreign_auto_create: bool,
    pub version: bool,
    /// Column on the foreign table used when auto-refreshing, instead of
    /// its id column.
    pub foreign_column_name: Option<String>,
    pub read_only: bool,
    pub foreign_collection: bool,
    pub foreign_collection_eager: bool,
    pub foreign_collection_max_eager_level: u32,
    pub foreign_collection_column_name: Option<String>,
    pub foreign_collection_order_column_name: Option<String>,
    pub foreign_collection_order_ascending: bool,
    pub foreign_collection_foreign_field_name: Option<String>,
    resolved_persister: OnceLock<Arc<dyn FieldPersister>>,
    derived_index_name: OnceLock<String>,
    derived_unique_index_name: OnceLock<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            column_name: None,
            data_type: Value::Null,
            declared_type: Value::Null,
            persister: None,
            default_value: None,
            width: 0,
            can_be_null: true,
            id: false,
            generated_id: false,
            generated_id_sequence: None,
            foreign: false,
            foreign_table_config: None,
            access: AccessStrategy::Direct,
            unknown_enum_value: None,
            throw_if_null: false,
            persisted: true,
            format: None,
            unique: false,
            unique_combo: false,
            index: false,
            index_name: None,
            unique_index: false,
            unique_index_name: None,
            foreign_auto_refresh: false,
            max_foreign_auto_refresh_level: None,
            allow_generated_id_insert: false,
            column_definition: None,
            foreign_auto_create: false,
            version: false,
            foreign_column_name: None,
            read_only: false,
            foreign_collection: false,
            foreign_collection_eager: false,
            foreign_collection_max_eager_level: MAX_EAGER_LEVEL,
            foreign_collection_column_name: None,
            foreign_collection_order_column_name: None,
            foreign_collection_order_ascending: true,
            foreign_collection_foreign_field_name: None,
            resolved_persister: OnceLock::new(),
            derived_index_name: OnceLock::new(),
            derived_unique_index_name: OnceLock::new(),
        }
    }
}

impl FieldConfig {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Default::default()
        }
    }

    /// Resolve the configuration of one field from whichever declarative
    /// source applies, in precedence order: the direct persistence record,
    /// then a foreign-collection record, then the process-wide persistence
    /// adapter when one was enabled at startup. `None` means the field is
    /// not persisted.
    pub fn from_field(dialect: &dyn Dialect, field: &FieldView) -> Result<Option<FieldConfig>> {
        if let Some(attrs) = &field.column {
            // A record explicitly marked not persisted excludes the field
            // outright, no other source is consulted.
            if !attrs.persisted {
                return Ok(None);
            }
            return Self::from_column_attrs(dialect, field, attrs).map(Some);
        }
        if let Some(attrs) = &field.foreign_collection {
            return Ok(Some(Self::from_foreign_collection(field, attrs)));
        }
        match persistence_adapter() {
            Some(adapter) => adapter.create_field_config(dialect, field),
            None => Ok(None),
        }
    }

    /// Resolve a direct persistence record into a config, normalizing blank
    /// names to absent and validating the enum fallback.
    pub fn from_column_attrs(
        dialect: &dyn Dialect,
        field: &FieldView,
        attrs: &ColumnAttrs,
    ) -> Result<FieldConfig> {
        let mut config = FieldConfig::new(field.name.as_ref());
        if dialect.upcase_entity_names() {
            config.field_name = config.field_name.to_uppercase();
        }
        config.column_name = value_if_not_blank(&attrs.column_name);
        config.data_type = attrs.data_type.clone();
        config.declared_type = field.value.clone();
        config.persister = attrs.persister.clone();
        config.default_value = attrs.default_value.clone();
        config.width = attrs.width;
        config.can_be_null = attrs.can_be_null;
        config.id = attrs.id;
        config.generated_id = attrs.generated_id;
        config.generated_id_sequence = value_if_not_blank(&attrs.generated_id_sequence);
        config.foreign = attrs.foreign;
        config.access = if attrs.use_get_set {
            AccessStrategy::AccessorPair
        } else {
            AccessStrategy::Direct
        };
        config.unknown_enum_value = match value_if_not_blank(&attrs.unknown_enum_name) {
            Some(name) => Some(field.matching_variant(&name)?.to_owned()),
            None => None,
        };
        config.throw_if_null = attrs.throw_if_null;
        config.format = value_if_not_blank(&attrs.format);
        config.unique = attrs.unique;
        config.unique_combo = attrs.unique_combo;
        config.index = attrs.index;
        config.index_name = value_if_not_blank(&attrs.index_name);
        config.unique_index = attrs.unique_index;
        config.unique_index_name = value_if_not_blank(&attrs.unique_index_name);
        config.foreign_auto_refresh = attrs.foreign_auto_refresh;
        config.max_foreign_auto_refresh_level = attrs.max_foreign_auto_refresh_level;
        config.allow_generated_id_insert = attrs.allow_generated_id_insert;
        config.column_definition = value_if_not_blank(&attrs.column_definition);
        config.foreign_auto_create = attrs.foreign_auto_create;
        config.version = attrs.version;
        config.foreign_column_name = value_if_not_blank(&attrs.foreign_column_name);
        config.read_only = attrs.read_only;
        Ok(config)
    }

    /// Resolve a foreign-collection record. Collection configs never carry
    /// scalar column shape, the two are mutually exclusive by construction.
    pub fn from_foreign_collection(
        field: &FieldView,
        attrs: &ForeignCollectionAttrs,
    ) -> FieldConfig {
        let mut config = FieldConfig::new(field.name.as_ref());
        config.column_name = value_if_not_blank(&attrs.column_name);
        config.foreign_collection = true;
        config.foreign_collection_eager = attrs.eager;
        config.foreign_collection_max_eager_level = attrs.max_eager_level;
        config.foreign_collection_column_name = value_if_not_blank(&attrs.column_name);
        config.foreign_collection_order_column_name = value_if_not_blank(&attrs.order_column_name);
        config.foreign_collection_order_ascending = attrs.order_ascending;
        // The newer attribute wins whenever both spellings are present.
        config.foreign_collection_foreign_field_name =
            value_if_not_blank(&attrs.foreign_field_name)
                .or_else(|| value_if_not_blank(&attrs.foreign_column_name));
        config
    }

    /// Cross-source defaulting applied once after every configuration
    /// source for the field has been merged, before the config is used for
    /// statement generation. Reapplication leaves the config unchanged.
    pub fn post_process(&mut self) {
        if self.foreign_column_name.is_some() {
            self.foreign_auto_refresh = true;
        }
        if self.foreign_auto_refresh && self.max_foreign_auto_refresh_level.is_none() {
            self.max_foreign_auto_refresh_level = Some(DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL);
        }
    }

    /// Name of the index covering this column, deriving
    /// `<table>_<column>_idx` on first use when the index flag is set
    /// without an explicit name.
    pub fn index_name(&self, table_name: &str) -> Option<&str> {
        if self.index && self.index_name.is_none() {
            return Some(
                self.derived_index_name
                    .get_or_init(|| self.find_index_name(table_name)),
            );
        }
        self.index_name.as_deref()
    }

    /// Unique-index counterpart of [`index_name`](FieldConfig::index_name).
    pub fn unique_index_name(&self, table_name: &str) -> Option<&str> {
        if self.unique_index && self.unique_index_name.is_none() {
            return Some(
                self.derived_unique_index_name
                    .get_or_init(|| self.find_index_name(table_name)),
            );
        }
        self.unique_index_name.as_deref()
    }

    fn find_index_name(&self, table_name: &str) -> String {
        let column = self.column_name.as_deref().unwrap_or(&self.field_name);
        format!("{}_{}_idx", table_name, column)
    }

    /// The persister converting this field's values, resolved on first use
    /// and cached: an explicit persister wins, else the explicit type tag,
    /// else the tag inferred from the field declaration.
    pub fn data_persister(&self) -> Result<Arc<dyn FieldPersister>> {
        if let Some(persister) = self.resolved_persister.get() {
            return Ok(persister.clone());
        }
        let resolved: Arc<dyn FieldPersister> = if let Some(persister) = &self.persister {
            persister.clone()
        } else if !matches!(self.data_type, Value::Null) {
            Arc::new(TagPersister::new(self.data_type.clone())?)
        } else if !matches!(self.declared_type, Value::Null) {
            Arc::new(TagPersister::new(self.declared_type.clone())?)
        } else {
            let error = ConfigError::UnresolvedType {
                field: self.field_name.clone(),
            };
            log::error!("{}", error);
            return Err(error.into());
        };
        // A racing first resolution computes the same value, whoever wins.
        Ok(self.resolved_persister.get_or_init(|| resolved).clone())
    }

    /// Wire-level type used when binding this field's placeholder.
    pub fn sql_type(&self) -> Result<SqlType> {
        Ok(self.data_persister()?.sql_type())
    }

    /// Decode the configured default value, honoring the format pattern.
    pub fn parse_default(&self) -> Result<Option<Value>> {
        let Some(text) = &self.default_value else {
            return Ok(None);
        };
        self.data_persister()?
            .parse_text(self.format.as_deref(), text)
            .with_context(|| {
                format!(
                    "Cannot parse the default value of field `{}`",
                    self.field_name
                )
            })
            .map(Some)
    }

    pub fn is_foreign_collection(&self) -> bool {
        self.foreign_collection
    }
}

/// Annotation semantics: a blank string means the attribute was never
/// configured.
fn value_if_not_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
