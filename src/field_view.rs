use crate::{ColumnAttrs, ConfigError, ForeignCollectionAttrs, Result, Value};
use std::borrow::Cow;

/// A struct field as seen by the resolver: a stable name, the declared type
/// and whatever declarative records are attached to it.
///
/// Produced by a derive macro in the usual case, or assembled by hand for
/// programmatic wiring.
#[derive(Default, Debug, Clone)]
pub struct FieldView {
    /// Field name in the entity type.
    pub name: Cow<'static, str>,
    /// Declared type tag (`Value::Null` when the declaration is not a
    /// recognized scalar, e.g. an enum or a foreign entity).
    pub value: Value,
    /// The field declaration wraps its type in `Option`.
    pub nullable: bool,
    /// Variant names when the declared type is an enum.
    pub enum_variants: Option<Box<[Cow<'static, str>]>>,
    /// Direct persistence record.
    pub column: Option<ColumnAttrs>,
    /// Foreign collection record.
    pub foreign_collection: Option<ForeignCollectionAttrs>,
}

impl FieldView {
    pub fn new(name: impl Into<Cow<'static, str>>, value: Value, nullable: bool) -> Self {
        Self {
            name: name.into(),
            value,
            nullable,
            ..Default::default()
        }
    }

    pub fn with_enum_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.enum_variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_column(mut self, attrs: ColumnAttrs) -> Self {
        self.column = Some(attrs);
        self
    }

    pub fn with_foreign_collection(mut self, attrs: ForeignCollectionAttrs) -> Self {
        self.foreign_collection = Some(attrs);
        self
    }

    /// Exact-match lookup of an enum fallback name among the declared
    /// variants. A name that matches nothing is invalid configuration.
    pub fn matching_variant(&self, name: &str) -> Result<&str> {
        let Some(variants) = &self.enum_variants else {
            let error = ConfigError::NoEnumVariants {
                field: self.name.to_string(),
            };
            log::error!("{}", error);
            return Err(error.into());
        };
        match variants.iter().find(|variant| variant.as_ref() == name) {
            Some(variant) => Ok(variant.as_ref()),
            None => {
                let error = ConfigError::UnknownEnumVariant {
                    field: self.name.to_string(),
                    name: name.to_owned(),
                };
                log::error!("{}", error);
                Err(error.into())
            }
        }
    }
}
