use entity::store::{EntityStore, StoreError};

pub struct UserRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Creates a new user
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the username is already taken.
    pub fn create(&self, user: entity::user::NewModel) -> Result<entity::user::Model, StoreError> {
        let username = user.username.clone();

        self.store
            .users()
            .create_unless(user, |existing| existing.username == username)
            .ok_or_else(|| StoreError::UniqueViolation {
                collection: <entity::user::Model as entity::Record>::COLLECTION,
                field: "username",
                value: username.clone(),
            })
    }

    pub fn get_by_id(&self, user_id: i32) -> Option<entity::user::Model> {
        self.store.users().get_by_id(user_id)
    }

    pub fn get_by_username(&self, username: &str) -> Option<entity::user::Model> {
        self.store.users().find(|user| user.username == username)
    }
}
