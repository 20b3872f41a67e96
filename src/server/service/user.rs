use entity::store::EntityStore;

use crate::{model::user::UserDto, server::data::user::UserRepository};

/// Service for reading user accounts.
pub struct UserService<'a> {
    store: &'a EntityStore,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Retrieves a user without their password.
    ///
    /// # Returns
    /// - `Some(UserDto)` - User found
    /// - `None` - No user with `user_id`
    pub fn get_user(&self, user_id: i32) -> Option<UserDto> {
        UserRepository::new(self.store)
            .get_by_id(user_id)
            .map(UserDto::from)
    }
}
