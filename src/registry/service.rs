use std::sync::Arc;

use super::error::StorageError;
use super::repository::NameStore;

/// Add/list service over the names table.
///
/// Holds no state of its own; every call goes to the store. Clones share the
/// same store. Logging happens at the HTTP boundary, not here.
#[derive(Clone)]
pub struct NameRegistry {
    store: Arc<dyn NameStore>,
}

impl NameRegistry {
    pub fn new(store: Arc<dyn NameStore>) -> Self {
        Self { store }
    }

    /// Append `name`. Any string is accepted, including empty and repeated
    /// values. Errors are not retried.
    pub async fn add_name(&self, name: &str) -> Result<(), StorageError> {
        self.store.insert(name).await
    }

    /// Every name ever added, in insertion order.
    pub async fn list_names(&self) -> Result<Vec<String>, StorageError> {
        self.store.fetch_all().await
    }
}

/// Render as `[a, b, c]`; an empty list renders as `[]`.
pub fn render_names(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
