//! Test result update service.
//!
//! Validates partial updates of a test result and applies the validated fields to
//! the store. Validation runs to completion before the store is touched, so an
//! update is either applied in full or not at all.

#[cfg(test)]
mod tests;

use entity::{skill_test_result::UpdateModel, store::EntityStore};

use crate::{
    model::test_result::{TestResultDto, UpdateTestResultDto},
    server::{
        data::test_result::TestResultRepository,
        error::{
            not_found::NotFoundError,
            validation::{FieldError, ValidationError},
            Error,
        },
    },
};

/// Service for mutating test results.
pub struct ResultService<'a> {
    store: &'a EntityStore,
}

impl<'a> ResultService<'a> {
    /// Creates a new instance of [`ResultService`]
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Applies a partial update to a test result.
    ///
    /// Score is bounded by the stored result's max score, which never changes after
    /// creation, so validating against a prior read stays correct when other updates
    /// land in between. The merge itself is serialized by the store.
    ///
    /// # Arguments
    /// - `result_id` - ID of the test result to update
    /// - `update` - Fields to change; absent fields are left untouched
    ///
    /// # Returns
    /// - `Ok(TestResultDto)` - The merged, stored result
    /// - `Err(Error::NotFound)` - No test result with `result_id`
    /// - `Err(Error::Validation)` - At least one present field is out of bounds; nothing was stored
    pub fn apply_update(
        &self,
        result_id: i32,
        update: UpdateTestResultDto,
    ) -> Result<TestResultDto, Error> {
        let repository = TestResultRepository::new(self.store);

        let existing = repository
            .get_by_id(result_id)
            .ok_or(NotFoundError::TestResult(result_id))?;

        let validated = validate_update(&update, existing.max_score)?;
        if validated.is_empty() {
            tracing::debug!(result_id = %result_id, "Empty update, result left unchanged");

            return Ok(existing.into());
        }

        let updated = repository.update(result_id, validated)?;

        tracing::info!(
            result_id = %result_id,
            rank = %updated.rank,
            percentile = %updated.percentile,
            score = %updated.score,
            "Updated test result"
        );

        Ok(updated.into())
    }
}

/// Checks every present field of `update` against its bounds.
///
/// # Arguments
/// - `update` - Requested field values
/// - `max_score` - Upper bound for `score`, taken from the stored result
///
/// # Returns
/// - `Ok(UpdateModel)` - The present fields converted to their stored types
/// - `Err(ValidationError)` - One entry per offending field
pub fn validate_update(
    update: &UpdateTestResultDto,
    max_score: i32,
) -> Result<UpdateModel, ValidationError> {
    let mut errors = Vec::new();
    let mut validated = UpdateModel::default();

    if let Some(rank) = update.rank {
        match as_integer(rank) {
            None => errors.push(FieldError::new("rank", "Rank must be an integer")),
            Some(rank) if rank < 1 => {
                errors.push(FieldError::new("rank", "Rank must be at least 1"))
            }
            Some(rank) => validated.rank = Some(rank),
        }
    }

    if let Some(percentile) = update.percentile {
        if !percentile.is_finite() {
            errors.push(FieldError::new(
                "percentile",
                "Percentile must be a finite number",
            ));
        } else if percentile < 0.0 {
            errors.push(FieldError::new(
                "percentile",
                "Percentile must be at least 0",
            ));
        } else if percentile > 100.0 {
            errors.push(FieldError::new(
                "percentile",
                "Percentile must be at most 100",
            ));
        } else {
            validated.percentile = Some(percentile);
        }
    }

    if let Some(score) = update.score {
        match as_integer(score) {
            None => errors.push(FieldError::new("score", "Score must be an integer")),
            Some(score) if score < 0 => {
                errors.push(FieldError::new("score", "Score must be at least 0"))
            }
            Some(score) if score > max_score => errors.push(FieldError::new(
                "score",
                format!("Score must be at most {}", max_score),
            )),
            Some(score) => validated.score = Some(score),
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(ValidationError { errors })
    }
}

/// Converts a JSON number to `i32` when it is a whole number in range.
fn as_integer(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }

    Some(value as i32)
}
