//! Application state shared by every handler.

use std::path::PathBuf;
use std::sync::Arc;

use crate::store::DocumentStore;

/// Handler dependencies: the store handle (passed by ownership, no
/// globals) and the directory backing the `/uploads` mount.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            uploads_dir: uploads_dir.into(),
        }
    }
}
