use entity::store::EntityStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
    /// User whose results the dashboard shows; there is no login
    pub demo_user_id: i32,
}

impl From<(EntityStore, i32)> for AppState {
    fn from((store, demo_user_id): (EntityStore, i32)) -> Self {
        Self {
            store,
            demo_user_id,
        }
    }
}
