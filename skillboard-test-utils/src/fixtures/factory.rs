//! Factory functions for insert models with standard test values.
//!
//! These only build values, nothing is written to a store.

use chrono::{TimeZone, Utc};
use entity::syllabus_result::Color;

/// Create a user insert model with the given username.
pub fn new_user(username: &str) -> entity::user::NewModel {
    entity::user::NewModel {
        username: username.to_string(),
        password: "password".to_string(),
        display_name: format!("Test User {}", username),
        avatar: None,
    }
}

/// Create a skill test insert model with the given title.
///
/// The test has 8 questions, lasts 15 minutes and was submitted on 2021-06-05.
pub fn new_skill_test(title: &str) -> entity::skill_test::NewModel {
    entity::skill_test::NewModel {
        title: title.to_string(),
        icon: "html5".to_string(),
        questions: 8,
        duration: 15,
        submitted_at: Utc
            .with_ymd_and_hms(2021, 6, 5, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Create a test result insert model with rank 1, percentile 30 and score 10 of 15.
pub fn new_test_result(user_id: i32, test_id: i32) -> entity::skill_test_result::NewModel {
    entity::skill_test_result::NewModel {
        user_id,
        test_id,
        rank: 1,
        percentile: 30.0,
        score: 10,
        max_score: 15,
    }
}

/// Create a syllabus result insert model.
pub fn new_syllabus_result(
    test_result_id: i32,
    title: &str,
    percentage: f64,
    color: Color,
) -> entity::syllabus_result::NewModel {
    entity::syllabus_result::NewModel {
        test_result_id,
        title: title.to_string(),
        percentage,
        color,
    }
}
