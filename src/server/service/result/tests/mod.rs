
use skillboard_test_utils::prelude::*;

use crate::model::test_result::UpdateTestResultDto;

fn update(rank: Option<f64>, percentile: Option<f64>, score: Option<f64>) -> UpdateTestResultDto {
    UpdateTestResultDto {
        rank,
        percentile,
        score,
    }
}
