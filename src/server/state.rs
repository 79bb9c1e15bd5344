use std::sync::Arc;

use crate::config::Settings;
use crate::infrastructure::postgres::PostgresPool;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: PostgresPool,
}

impl AppState {
    pub fn new(settings: Settings, db: PostgresPool) -> Self {
        Self {
            settings: Arc::new(settings),
            db,
        }
    }
}
