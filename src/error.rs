use thiserror::Error;

/// Malformed or ambiguous declarative metadata.
///
/// Raised while resolving field configuration or while constructing a
/// statement request, never deferred to bind or execution time: the caller
/// finds out before any connection resource is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown enum fallback `{name}` for field `{field}`")]
    UnknownEnumVariant { field: String, name: String },

    #[error("field `{field}` configures an enum fallback but declares no enum variants")]
    NoEnumVariants { field: String },

    #[error("could not find a {kind} accessor `{method}` for field `{field}`")]
    AccessorNotFound {
        kind: &'static str,
        method: String,
        field: String,
    },

    #[error("{kind} accessor `{method}` for field `{field}` does not match the field type")]
    AccessorMismatch {
        kind: &'static str,
        method: String,
        field: String,
    },

    #[error("field `{field}` has no resolvable data type")]
    UnresolvedType { field: String },

    #[error("expected {fields} bound arguments to match the argument field list, got {args}")]
    ArgumentCountMismatch { fields: usize, args: usize },
}

/// Connection-level failure while compiling a statement, applying a row
/// limit or binding a positional argument. Carries the offending statement
/// text for diagnosability; the underlying driver failure is the source.
#[derive(Error, Debug)]
#[error("database access failed for statement:\n{statement}")]
pub struct DatabaseError {
    pub statement: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl DatabaseError {
    pub fn new(statement: impl Into<String>, source: crate::Error) -> Self {
        Self {
            statement: statement.into(),
            source: source.into(),
        }
    }
}
