use crate::{Dialect, FieldConfig, FieldView, Result};
use std::sync::OnceLock;

/// Optional process-wide capability translating a generic
/// persistence-annotation standard into field configs. Consulted by the
/// resolver only for fields carrying none of the native records.
pub trait PersistenceAdapter: Send + Sync {
    /// `None` when the field carries no generic persistence markup either.
    fn create_field_config(
        &self,
        dialect: &dyn Dialect,
        field: &FieldView,
    ) -> Result<Option<FieldConfig>>;
}

static ADAPTER: OnceLock<Option<Box<dyn PersistenceAdapter>>> = OnceLock::new();

/// Establish the adapter capability, once, during process initialization
/// and before any concurrent resolution. The first call wins; a failed
/// probe permanently disables the capability for the process.
///
/// Returns whether the capability ended up enabled.
pub fn init_persistence_adapter<F>(probe: F) -> bool
where
    F: FnOnce() -> Result<Box<dyn PersistenceAdapter>>,
{
    ADAPTER
        .get_or_init(|| match probe() {
            Ok(adapter) => Some(adapter),
            Err(error) => {
                log::debug!("persistence adapter disabled: {:#}", error);
                None
            }
        })
        .is_some()
}

/// The process-wide adapter, when one was enabled at startup.
pub fn persistence_adapter() -> Option<&'static dyn PersistenceAdapter> {
    ADAPTER.get().and_then(|adapter| adapter.as_deref())
}
