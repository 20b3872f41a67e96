use entity::store::{EntityStore, StoreError};

pub struct TestResultRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> TestResultRepository<'a> {
    /// Creates a new instance of [`TestResultRepository`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    pub fn create(
        &self,
        result: entity::skill_test_result::NewModel,
    ) -> entity::skill_test_result::Model {
        self.store.test_results().create(result)
    }

    pub fn get_by_id(&self, result_id: i32) -> Option<entity::skill_test_result::Model> {
        self.store.test_results().get_by_id(result_id)
    }

    /// Finds the result a user has for a skill test
    ///
    /// At most one result exists per user and test; should more exist the lowest ID wins.
    pub fn get_by_user_and_test(
        &self,
        user_id: i32,
        test_id: i32,
    ) -> Option<entity::skill_test_result::Model> {
        self.store
            .test_results()
            .find(|result| result.user_id == user_id && result.test_id == test_id)
    }

    /// Merges the present fields of `update` over the stored result
    ///
    /// Performs no bound checks, callers validate beforehand.
    ///
    /// # Returns
    /// - `Ok(Model)` - The merged, stored result
    /// - `Err(StoreError::NotFound)` - No result exists at `result_id`
    pub fn update(
        &self,
        result_id: i32,
        update: entity::skill_test_result::UpdateModel,
    ) -> Result<entity::skill_test_result::Model, StoreError> {
        self.store.test_results().update(result_id, update)
    }
}
