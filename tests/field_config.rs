#[cfg(test)]
mod tests {
    use silo::{
        ColumnAttrs, ConfigError, DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL, Dialect, FieldConfig,
        FieldView, ForeignCollectionAttrs, GenericDialect, TableConfig, Value,
    };

    struct UpcaseDialect;

    impl Dialect for UpcaseDialect {
        fn name(&self) -> &str {
            "upcase"
        }
        fn upcase_entity_names(&self) -> bool {
            true
        }
    }

    fn varchar_field(name: &'static str) -> FieldView {
        FieldView::new(name, Value::Varchar(None), false)
    }

    #[test]
    fn no_sources_yields_no_config() {
        let field = varchar_field("comment");
        let config = FieldConfig::from_field(&GenericDialect, &field).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn not_persisted_yields_no_config() {
        let field = varchar_field("scratch").with_column(ColumnAttrs {
            persisted: false,
            ..Default::default()
        });
        let config = FieldConfig::from_field(&GenericDialect, &field).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn not_persisted_wins_over_other_sources() {
        // The direct record short-circuits even when a collection record is
        // also attached to the field.
        let field = varchar_field("scratch")
            .with_column(ColumnAttrs {
                persisted: false,
                ..Default::default()
            })
            .with_foreign_collection(ForeignCollectionAttrs {
                eager: true,
                ..Default::default()
            });
        let config = FieldConfig::from_field(&GenericDialect, &field).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn column_record_resolves() {
        let field = varchar_field("title").with_column(ColumnAttrs {
            column_name: "book_title".into(),
            width: 255,
            can_be_null: false,
            unique: true,
            default_value: Some("untitled".into()),
            ..Default::default()
        });
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert_eq!(config.field_name, "title");
        assert_eq!(config.column_name.as_deref(), Some("book_title"));
        assert_eq!(config.width, 255);
        assert!(!config.can_be_null);
        assert!(config.unique);
        assert_eq!(config.default_value.as_deref(), Some("untitled"));
        assert!(config.persisted);
        assert!(!config.is_foreign_collection());
        assert!(config.declared_type.same_type(&Value::Varchar(None)));
    }

    #[test]
    fn blank_names_normalize_to_absent() {
        let field = varchar_field("status").with_column(ColumnAttrs {
            column_name: "".into(),
            generated_id_sequence: "".into(),
            format: "".into(),
            index_name: "".into(),
            unique_index_name: "".into(),
            foreign_column_name: "".into(),
            column_definition: "".into(),
            ..Default::default()
        });
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert!(config.column_name.is_none());
        assert!(config.generated_id_sequence.is_none());
        assert!(config.format.is_none());
        assert!(config.index_name.is_none());
        assert!(config.unique_index_name.is_none());
        assert!(config.foreign_column_name.is_none());
        assert!(config.column_definition.is_none());
    }

    #[test]
    fn upcase_dialect_upcases_field_name() {
        let field = varchar_field("order_id").with_column(ColumnAttrs::default());
        let config = FieldConfig::from_field(&UpcaseDialect, &field)
            .unwrap()
            .unwrap();
        assert_eq!(config.field_name, "ORDER_ID");
        // Column name still defaults from the (upcased) field name later on.
        assert!(config.column_name.is_none());
    }

    #[test]
    fn enum_fallback_resolves_to_matching_variant() {
        let field = varchar_field("color")
            .with_enum_variants(["RED", "GREEN", "BLUE"])
            .with_column(ColumnAttrs {
                unknown_enum_name: "GREEN".into(),
                ..Default::default()
            });
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert_eq!(config.unknown_enum_value.as_deref(), Some("GREEN"));
    }

    #[test]
    fn enum_fallback_rejects_unknown_name() {
        let field = varchar_field("color")
            .with_enum_variants(["RED", "GREEN"])
            .with_column(ColumnAttrs {
                unknown_enum_name: "MAGENTA".into(),
                ..Default::default()
            });
        let error = FieldConfig::from_field(&GenericDialect, &field).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownEnumVariant { .. })
        ));
    }

    #[test]
    fn enum_fallback_requires_variants() {
        let field = varchar_field("color").with_column(ColumnAttrs {
            unknown_enum_name: "RED".into(),
            ..Default::default()
        });
        let error = FieldConfig::from_field(&GenericDialect, &field).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::NoEnumVariants { .. })
        ));
    }

    #[test]
    fn post_process_forces_auto_refresh_for_foreign_column() {
        let mut config = FieldConfig::new("owner");
        config.foreign_column_name = Some("ownerId".into());
        assert!(!config.foreign_auto_refresh);
        config.post_process();
        assert!(config.foreign_auto_refresh);
        assert_eq!(
            config.max_foreign_auto_refresh_level,
            Some(DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL)
        );
    }

    #[test]
    fn post_process_keeps_explicit_refresh_level() {
        let mut config = FieldConfig::new("owner");
        config.foreign_auto_refresh = true;
        config.max_foreign_auto_refresh_level = Some(7);
        config.post_process();
        assert_eq!(config.max_foreign_auto_refresh_level, Some(7));
    }

    #[test]
    fn post_process_leaves_unrelated_fields_alone() {
        let mut config = FieldConfig::new("plain");
        config.post_process();
        assert!(!config.foreign_auto_refresh);
        assert!(config.max_foreign_auto_refresh_level.is_none());
    }

    #[test]
    fn post_process_is_idempotent() {
        let mut once = FieldConfig::new("owner");
        once.foreign_column_name = Some("ownerId".into());
        once.post_process();
        let mut twice = once.clone();
        twice.post_process();
        assert_eq!(once.foreign_auto_refresh, twice.foreign_auto_refresh);
        assert_eq!(
            once.max_foreign_auto_refresh_level,
            twice.max_foreign_auto_refresh_level
        );
        assert_eq!(once.foreign_column_name, twice.foreign_column_name);
    }

    #[test]
    fn index_name_derives_from_field_name() {
        let mut config = FieldConfig::new("status");
        config.index = true;
        assert_eq!(config.index_name("orders"), Some("orders_status_idx"));
    }

    #[test]
    fn index_name_prefers_column_name() {
        let mut config = FieldConfig::new("status");
        config.index = true;
        config.column_name = Some("order_status".into());
        assert_eq!(config.index_name("orders"), Some("orders_order_status_idx"));
    }

    #[test]
    fn index_name_is_computed_once() {
        let mut config = FieldConfig::new("status");
        config.index = true;
        let first = config.index_name("orders").unwrap();
        let second = config.index_name("orders").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn explicit_index_name_wins() {
        let mut config = FieldConfig::new("status");
        config.index = true;
        config.index_name = Some("custom_idx".into());
        assert_eq!(config.index_name("orders"), Some("custom_idx"));
    }

    #[test]
    fn no_index_flag_no_derived_name() {
        let config = FieldConfig::new("status");
        assert_eq!(config.index_name("orders"), None);
    }

    #[test]
    fn unique_index_name_derives_independently() {
        let mut config = FieldConfig::new("code");
        config.unique_index = true;
        assert_eq!(config.unique_index_name("parts"), Some("parts_code_idx"));
        assert_eq!(config.index_name("parts"), None);
    }

    #[test]
    fn foreign_collection_record_resolves() {
        let field = FieldView::new("orders", Value::Null, false).with_foreign_collection(
            ForeignCollectionAttrs {
                eager: true,
                max_eager_level: 3,
                order_column_name: "created_at".into(),
                order_ascending: false,
                foreign_field_name: "customer".into(),
                ..Default::default()
            },
        );
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert!(config.is_foreign_collection());
        assert!(config.foreign_collection_eager);
        assert_eq!(config.foreign_collection_max_eager_level, 3);
        assert_eq!(
            config.foreign_collection_order_column_name.as_deref(),
            Some("created_at")
        );
        assert!(!config.foreign_collection_order_ascending);
        assert_eq!(
            config.foreign_collection_foreign_field_name.as_deref(),
            Some("customer")
        );
    }

    #[test]
    fn foreign_field_name_wins_over_deprecated_spelling() {
        let field = FieldView::new("orders", Value::Null, false).with_foreign_collection(
            ForeignCollectionAttrs {
                foreign_field_name: "customer".into(),
                foreign_column_name: "customer_id".into(),
                ..Default::default()
            },
        );
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert_eq!(
            config.foreign_collection_foreign_field_name.as_deref(),
            Some("customer")
        );
    }

    #[test]
    fn deprecated_spelling_used_when_newer_absent() {
        let field = FieldView::new("orders", Value::Null, false).with_foreign_collection(
            ForeignCollectionAttrs {
                foreign_column_name: "customer_id".into(),
                ..Default::default()
            },
        );
        let config = FieldConfig::from_field(&GenericDialect, &field)
            .unwrap()
            .unwrap();
        assert_eq!(
            config.foreign_collection_foreign_field_name.as_deref(),
            Some("customer_id")
        );
    }

    #[test]
    fn table_config_resolves_and_postprocesses() {
        let fields = [
            varchar_field("name").with_column(ColumnAttrs::default()),
            varchar_field("scratch").with_column(ColumnAttrs {
                persisted: false,
                ..Default::default()
            }),
            varchar_field("owner").with_column(ColumnAttrs {
                foreign: true,
                foreign_column_name: "ownerId".into(),
                ..Default::default()
            }),
            varchar_field("transient"),
        ];
        let table = TableConfig::from_fields(&GenericDialect, "accounts", &fields).unwrap();
        assert_eq!(table.table_name, "accounts");
        assert_eq!(table.field_configs.len(), 2);
        assert!(table.field_config("scratch").is_none());
        let owner = table.field_config("owner").unwrap();
        assert!(owner.foreign_auto_refresh);
        assert_eq!(
            owner.max_foreign_auto_refresh_level,
            Some(DEFAULT_MAX_FOREIGN_AUTO_REFRESH_LEVEL)
        );
    }
}
