use entity::store::EntityStore;

pub struct SkillTestRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> SkillTestRepository<'a> {
    /// Creates a new instance of [`SkillTestRepository`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    pub fn create(&self, test: entity::skill_test::NewModel) -> entity::skill_test::Model {
        self.store.skill_tests().create(test)
    }

    pub fn get_by_id(&self, test_id: i32) -> Option<entity::skill_test::Model> {
        self.store.skill_tests().get_by_id(test_id)
    }

    /// Lists all skill tests in ascending ID order
    pub fn list(&self) -> Vec<entity::skill_test::Model> {
        self.store.skill_tests().list()
    }
}

#[cfg(test)]
mod tests {
    use skillboard_test_utils::prelude::*;

    use crate::server::data::skill_test::SkillTestRepository;

    /// Expect list to return every created test in creation order
    #[test]
    fn lists_created_tests() -> Result<(), TestError> {
        let test = TestBuilder::new().build()?;
        let skill_test_repository = SkillTestRepository::new(&test.store);

        let html = skill_test_repository.create(factory::new_skill_test("HTML"));
        let css = skill_test_repository.create(factory::new_skill_test("CSS"));

        let tests = skill_test_repository.list();

        assert_eq!(tests, vec![html, css]);

        Ok(())
    }

    /// Expect None for a test ID that does not exist
    #[test]
    fn returns_none_for_nonexistent_test() -> Result<(), TestError> {
        let test = TestBuilder::new().with_skill_test("HTML").build()?;
        let skill_test_repository = SkillTestRepository::new(&test.store);

        assert!(skill_test_repository.get_by_id(1).is_some());
        assert!(skill_test_repository.get_by_id(999).is_none());

        Ok(())
    }
}
