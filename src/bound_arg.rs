use crate::{FieldConfig, Value};
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A positional placeholder inside generated SQL whose value is supplied
/// after the statement is built, right before compilation.
///
/// Distinct from the mapped field's own nullable value: an absent `BoundArg`
/// value compiles to a *typed* SQL null at its position. Owned by the
/// statement builder for the lifetime of one statement construction; the
/// compiler only reads it.
#[derive(Debug, Clone, Default)]
pub struct BoundArg {
    field: Option<Arc<FieldConfig>>,
    value: Option<Value>,
}

impl BoundArg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder carrying the config of the column it stands for.
    pub fn for_field(field: Arc<FieldConfig>) -> Self {
        Self {
            field: Some(field),
            value: None,
        }
    }

    pub fn field(&self) -> Option<&FieldConfig> {
        self.field.as_deref()
    }

    /// Supply the value bound at this placeholder's position.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Forget a previously supplied value; the placeholder compiles to a
    /// typed SQL null again.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl Display for BoundArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}", value),
            None => f.write_str("?"),
        }
    }
}
