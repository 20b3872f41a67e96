use std::fmt;

use crate::Record;

/// Dashboard colour label for a syllabus topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Primary,
    Secondary,
    Danger,
    Success,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i32,
    pub test_result_id: i32,
    pub title: String,
    /// Within `0.0..=100.0`
    pub percentage: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewModel {
    pub test_result_id: i32,
    pub title: String,
    pub percentage: f64,
    pub color: Color,
}

impl Record for Model {
    type New = NewModel;

    const COLLECTION: &'static str = "syllabus_results";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewModel) -> Self {
        Self {
            id,
            test_result_id: new.test_result_id,
            title: new.title,
            percentage: new.percentage,
            color: new.color,
        }
    }
}
