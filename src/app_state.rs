use crate::database::{DB, SeaOrmStore};

/// Shared handler context; one per worker, all pointing at the same pool.
#[derive(Clone)]
pub struct AppState {
    pub store: SeaOrmStore,
}

impl AppState {
    pub fn new(db: DB) -> Self {
        Self {
            store: SeaOrmStore::new(db),
        }
    }
}
