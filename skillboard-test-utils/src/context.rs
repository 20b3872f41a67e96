//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use entity::store::EntityStore;

use crate::{error::TestError, fixtures::demo::DemoFixture};

pub struct TestContext {
    /// Store populated with the builder's fixtures
    pub store: EntityStore,
    /// User the app state built from this context treats as the demo user
    pub demo_user_id: i32,

    demo: Option<DemoFixture>,
}

impl TestContext {
    pub(crate) fn new(demo_user_id: i32) -> Self {
        Self {
            store: EntityStore::new(),
            demo_user_id,
            demo: None,
        }
    }

    pub(crate) fn set_demo(&mut self, demo: DemoFixture) {
        self.demo = Some(demo);
    }

    /// IDs of the demo records.
    ///
    /// # Returns
    /// - `Ok(DemoFixture)` - The builder declared `with_demo_data`
    /// - `Err(TestError::MissingFixture)` - It did not
    pub fn demo(&self) -> Result<DemoFixture, TestError> {
        self.demo.ok_or(TestError::MissingFixture("demo data"))
    }

    /// Convert the store and demo user ID into any type that can be constructed from them.
    ///
    /// This allows conversion to the server's `AppState` without this crate depending on
    /// the server crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(EntityStore, i32)>,
    {
        T::from((self.store.clone(), self.demo_user_id))
    }
}
