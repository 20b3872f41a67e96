//! Read-only views composed for the dashboard.
//!
//! Every call recomputes its view from the store; nothing is cached.

#[cfg(test)]
mod tests;

use entity::store::EntityStore;

use crate::{
    model::test_result::{
        ComparisonDto, StandingDto, SyllabusResultDto, TestResultDetailDto, TestResultDto,
    },
    server::{
        data::{
            skill_test::SkillTestRepository, syllabus_result::SyllabusResultRepository,
            test_result::TestResultRepository,
        },
        error::{not_found::NotFoundError, Error},
    },
};

/// Average percentile of everyone who took a test.
///
/// There is no population to compute this from, the dashboard compares against a fixed value.
pub const AVERAGE_PERCENTILE: f64 = 72.0;

pub struct QueryService<'a> {
    store: &'a EntityStore,
}

impl<'a> QueryService<'a> {
    /// Creates a new instance of [`QueryService`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Builds the detail view of a user's result for a skill test.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the result
    /// - `test_id` - Skill test the result belongs to
    ///
    /// # Returns
    /// - `Ok(TestResultDetailDto)` - Test, result and syllabus rows ordered by ID
    /// - `Err(Error::NotFound)` - No result for the user and test, or the result's test is missing
    pub fn get_result_detail(
        &self,
        user_id: i32,
        test_id: i32,
    ) -> Result<TestResultDetailDto, Error> {
        let result = TestResultRepository::new(self.store)
            .get_by_user_and_test(user_id, test_id)
            .ok_or(NotFoundError::TestResultForTest { user_id, test_id })?;

        let Some(test) = SkillTestRepository::new(self.store).get_by_id(result.test_id) else {
            // Results are only created for existing tests, reaching this means the
            // store holds a dangling reference
            tracing::error!(
                result_id = %result.id,
                test_id = %result.test_id,
                "Test result references a skill test that does not exist"
            );

            return Err(NotFoundError::SkillTest(result.test_id).into());
        };

        let syllabus_results = SyllabusResultRepository::new(self.store)
            .get_by_test_result_id(result.id)
            .into_iter()
            .map(SyllabusResultDto::from)
            .collect();

        Ok(TestResultDetailDto {
            test: test.into(),
            result: TestResultDto::from(result),
            syllabus_results,
        })
    }

    /// Compares a user's result for a skill test against the average percentile.
    ///
    /// # Returns
    /// - `Ok(ComparisonDto)` - Percentile standing and score percentage
    /// - `Err(Error::NotFound)` - No result for the user and test
    pub fn get_comparison(&self, user_id: i32, test_id: i32) -> Result<ComparisonDto, Error> {
        let result = TestResultRepository::new(self.store)
            .get_by_user_and_test(user_id, test_id)
            .ok_or(NotFoundError::TestResultForTest { user_id, test_id })?;

        let standing = if result.percentile > AVERAGE_PERCENTILE {
            StandingDto::Higher
        } else if result.percentile < AVERAGE_PERCENTILE {
            StandingDto::Lower
        } else {
            StandingDto::Equal
        };

        let score_percentage = if result.max_score > 0 {
            f64::from(result.score) / f64::from(result.max_score) * 100.0
        } else {
            0.0
        };

        Ok(ComparisonDto {
            percentile: result.percentile,
            average_percentile: AVERAGE_PERCENTILE,
            standing,
            score_percentage,
        })
    }
}
