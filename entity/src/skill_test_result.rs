use crate::{Patch, Record};

/// A user's result for one skill test, the only record mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i32,
    pub user_id: i32,
    pub test_id: i32,
    /// 1 is the best rank
    pub rank: i32,
    /// Within `0.0..=100.0`
    pub percentile: f64,
    /// Within `0..=max_score`
    pub score: i32,
    pub max_score: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewModel {
    pub user_id: i32,
    pub test_id: i32,
    pub rank: i32,
    pub percentile: f64,
    pub score: i32,
    pub max_score: i32,
}

/// Sparse update of the user-editable fields of a result.
///
/// `max_score`, `user_id` and `test_id` are fixed once the result exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateModel {
    pub rank: Option<i32>,
    pub percentile: Option<f64>,
    pub score: Option<i32>,
}

impl UpdateModel {
    pub fn is_empty(&self) -> bool {
        self.rank.is_none() && self.percentile.is_none() && self.score.is_none()
    }
}

impl Record for Model {
    type New = NewModel;

    const COLLECTION: &'static str = "skill_test_results";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewModel) -> Self {
        Self {
            id,
            user_id: new.user_id,
            test_id: new.test_id,
            rank: new.rank,
            percentile: new.percentile,
            score: new.score,
            max_score: new.max_score,
        }
    }
}

impl Patch<Model> for UpdateModel {
    fn apply(self, model: &mut Model) {
        if let Some(rank) = self.rank {
            model.rank = rank;
        }
        if let Some(percentile) = self.percentile {
            model.percentile = percentile;
        }
        if let Some(score) = self.score {
            model.score = score;
        }
    }
}
