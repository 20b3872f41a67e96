use entity::syllabus_result::Color;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::skill_test::SkillTestDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResultDto {
    pub id: i32,
    pub user_id: i32,
    pub test_id: i32,
    pub rank: i32,
    pub percentile: f64,
    pub score: i32,
    pub max_score: i32,
}

impl From<entity::skill_test_result::Model> for TestResultDto {
    fn from(result: entity::skill_test_result::Model) -> Self {
        Self {
            id: result.id,
            user_id: result.user_id,
            test_id: result.test_id,
            rank: result.rank,
            percentile: result.percentile,
            score: result.score,
            max_score: result.max_score,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyllabusColorDto {
    Primary,
    Secondary,
    Danger,
    Success,
}

impl From<Color> for SyllabusColorDto {
    fn from(color: Color) -> Self {
        match color {
            Color::Primary => Self::Primary,
            Color::Secondary => Self::Secondary,
            Color::Danger => Self::Danger,
            Color::Success => Self::Success,
        }
    }
}

/// Score for a single syllabus topic of a test result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusResultDto {
    pub id: i32,
    pub test_result_id: i32,
    pub title: String,
    pub percentage: f64,
    pub color: SyllabusColorDto,
}

impl From<entity::syllabus_result::Model> for SyllabusResultDto {
    fn from(syllabus: entity::syllabus_result::Model) -> Self {
        Self {
            id: syllabus.id,
            test_result_id: syllabus.test_result_id,
            title: syllabus.title,
            percentage: syllabus.percentage,
            color: syllabus.color.into(),
        }
    }
}

/// A test result together with its test and syllabus breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResultDetailDto {
    pub test: SkillTestDto,
    pub result: TestResultDto,
    /// Ordered by ascending syllabus result ID
    pub syllabus_results: Vec<SyllabusResultDto>,
}

/// Partial update of a test result.
///
/// Absent or `null` fields are left untouched. Values are accepted as any JSON
/// number and checked for integrality and bounds before anything is stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTestResultDto {
    /// Integer, at least 1
    #[serde(default)]
    pub rank: Option<f64>,
    /// Between 0 and 100 inclusive
    #[serde(default)]
    pub percentile: Option<f64>,
    /// Integer between 0 and the result's max score inclusive
    #[serde(default)]
    pub score: Option<f64>,
}

/// Where a percentile sits relative to the average percentile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StandingDto {
    Higher,
    Lower,
    Equal,
}

/// Comparison of a result against all takers of the test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDto {
    pub percentile: f64,
    pub average_percentile: f64,
    pub standing: StandingDto,
    /// `score / maxScore * 100`
    pub score_percentage: f64,
}
