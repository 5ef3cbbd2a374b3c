/// Backend facts consulted while resolving field metadata.
pub trait Dialect: Send + Sync {
    /// Dialect name, used in diagnostics.
    fn name(&self) -> &str;

    /// The backend forces entity identifiers to upper case.
    fn upcase_entity_names(&self) -> bool {
        false
    }
}

/// Dialect with no identifier-case requirements.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn name(&self) -> &str {
        "generic"
    }
}
