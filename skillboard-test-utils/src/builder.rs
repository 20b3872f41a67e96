//! Declarative test builder.
//!
//! Fixture methods only queue records; everything is inserted into a fresh store,
//! in the order the methods were called, when [`TestBuilder::build`] runs.

use entity::syllabus_result::Color;

use crate::{
    context::TestContext,
    error::TestError,
    fixtures::{demo, factory},
};

const DEFAULT_DEMO_USER_ID: i32 = 1;

enum Fixture {
    Demo,
    User(entity::user::NewModel),
    SkillTest(entity::skill_test::NewModel),
    TestResult(entity::skill_test_result::NewModel),
    SyllabusResult(entity::syllabus_result::NewModel),
}

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```
/// use skillboard_test_utils::TestBuilder;
///
/// # fn example() -> Result<(), skillboard_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_demo_data()
///     .with_skill_test("CSS")
///     .build()?;
///
/// assert_eq!(test.store.skill_tests().len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    fixtures: Vec<Fixture>,
    demo_user_id: i32,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no fixtures and demo user ID 1.
    pub fn new() -> Self {
        Self {
            fixtures: Vec::new(),
            demo_user_id: DEFAULT_DEMO_USER_ID,
        }
    }

    /// Insert the demo user, HTML skill test, result and four syllabus rows.
    ///
    /// Declared on an empty builder, the user, test and result all get ID 1.
    pub fn with_demo_data(mut self) -> Self {
        self.fixtures.push(Fixture::Demo);
        self
    }

    /// Set the user the context's app state treats as the demo user.
    pub fn with_demo_user_id(mut self, user_id: i32) -> Self {
        self.demo_user_id = user_id;
        self
    }

    /// Insert a user with the given username.
    pub fn with_user(mut self, username: &str) -> Self {
        self.fixtures.push(Fixture::User(factory::new_user(username)));
        self
    }

    /// Insert a skill test with the given title.
    pub fn with_skill_test(mut self, title: &str) -> Self {
        self.fixtures
            .push(Fixture::SkillTest(factory::new_skill_test(title)));
        self
    }

    /// Insert a result with rank 1, percentile 30 and score 10 of 15.
    ///
    /// Neither the user nor the test need to exist.
    pub fn with_test_result(mut self, user_id: i32, test_id: i32) -> Self {
        self.fixtures
            .push(Fixture::TestResult(factory::new_test_result(user_id, test_id)));
        self
    }

    /// Insert a result with the given score and max score.
    pub fn with_test_result_scored(
        mut self,
        user_id: i32,
        test_id: i32,
        score: i32,
        max_score: i32,
    ) -> Self {
        let mut result = factory::new_test_result(user_id, test_id);
        result.score = score;
        result.max_score = max_score;

        self.fixtures.push(Fixture::TestResult(result));
        self
    }

    /// Insert a result with the given percentile.
    pub fn with_test_result_percentile(
        mut self,
        user_id: i32,
        test_id: i32,
        percentile: f64,
    ) -> Self {
        let mut result = factory::new_test_result(user_id, test_id);
        result.percentile = percentile;

        self.fixtures.push(Fixture::TestResult(result));
        self
    }

    /// Insert a syllabus row for a result.
    pub fn with_syllabus_result(
        mut self,
        test_result_id: i32,
        title: &str,
        percentage: f64,
        color: Color,
    ) -> Self {
        self.fixtures
            .push(Fixture::SyllabusResult(factory::new_syllabus_result(
                test_result_id,
                title,
                percentage,
                color,
            )));
        self
    }

    /// Create the store and insert every declared fixture.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Store populated with the declared fixtures
    /// - `Err(TestError::StoreError)` / `Err(TestError::InvalidFixture)` - A fixture conflicts with an earlier one
    pub fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new(self.demo_user_id);

        for fixture in self.fixtures {
            match fixture {
                Fixture::Demo => {
                    let inserted = demo::insert_demo(&context.store)?;
                    context.set_demo(inserted);
                }
                Fixture::User(user) => {
                    let username = user.username.clone();
                    context
                        .store
                        .users()
                        .create_unless(user, |u| u.username == username)
                        .ok_or_else(|| {
                            TestError::InvalidFixture(format!("username {} declared twice", username))
                        })?;
                }
                Fixture::SkillTest(test) => {
                    context.store.skill_tests().create(test);
                }
                Fixture::TestResult(result) => {
                    context.store.test_results().create(result);
                }
                Fixture::SyllabusResult(syllabus) => {
                    context.store.syllabus_results().create(syllabus);
                }
            }
        }

        Ok(context)
    }
}
