use crate::{Dialect, FieldConfig, FieldView, Result};

/// Resolved mapping of one entity type: the table name plus the canonical
/// config of every persisted field.
///
/// Construction is the single place where field configs are resolved and
/// postprocessed, so a published `TableConfig` only ever hands out fully
/// defaulted descriptors.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    pub table_name: String,
    pub field_configs: Vec<FieldConfig>,
}

impl TableConfig {
    /// Wrap programmatically built configs. Postprocessing is applied here;
    /// configs that already went through it are unaffected.
    pub fn new(table_name: impl Into<String>, mut field_configs: Vec<FieldConfig>) -> Self {
        for config in &mut field_configs {
            config.post_process();
        }
        Self {
            table_name: table_name.into(),
            field_configs,
        }
    }

    /// Resolve every field of an entity type. Fields with no applicable
    /// declarative source are left out of the mapping entirely.
    pub fn from_fields(
        dialect: &dyn Dialect,
        table_name: impl Into<String>,
        fields: &[FieldView],
    ) -> Result<Self> {
        let mut configs = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(config) = FieldConfig::from_field(dialect, field)? {
                configs.push(config);
            }
        }
        Ok(Self::new(table_name, configs))
    }

    pub fn field_config(&self, field_name: &str) -> Option<&FieldConfig> {
        self.field_configs
            .iter()
            .find(|config| config.field_name == field_name)
    }
}
