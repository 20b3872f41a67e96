use entity::store::EntityStore;

pub struct SyllabusResultRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> SyllabusResultRepository<'a> {
    /// Creates a new instance of [`SyllabusResultRepository`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    pub fn create(
        &self,
        syllabus: entity::syllabus_result::NewModel,
    ) -> entity::syllabus_result::Model {
        self.store.syllabus_results().create(syllabus)
    }

    /// Syllabus breakdown of a test result, in ascending ID order
    pub fn get_by_test_result_id(&self, test_result_id: i32) -> Vec<entity::syllabus_result::Model> {
        self.store
            .syllabus_results()
            .filter(|syllabus| syllabus.test_result_id == test_result_id)
    }
}
