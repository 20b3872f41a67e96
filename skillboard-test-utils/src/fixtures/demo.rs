//! The demo data set: one user, one skill test, their result and its syllabus rows.

use entity::{store::EntityStore, syllabus_result::Color};

use crate::{error::TestError, fixtures::factory};

pub const DEMO_USERNAME: &str = "rahil";

pub const DEMO_SYLLABUS: [(&str, f64, Color); 4] = [
    ("HTML Tools, Forms, History", 80.0, Color::Primary),
    ("Tags & References in HTML", 60.0, Color::Secondary),
    ("Tables & References in HTML", 24.0, Color::Danger),
    ("Tables & CSS Basics", 96.0, Color::Success),
];

/// IDs of the records inserted for the demo data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoFixture {
    pub user_id: i32,
    pub test_id: i32,
    pub result_id: i32,
}

/// Insert the demo data set into `store`.
///
/// The result has rank 1, percentile 30 and score 10 of 15.
pub(crate) fn insert_demo(store: &EntityStore) -> Result<DemoFixture, TestError> {
    let user = store
        .users()
        .create_unless(factory::new_user(DEMO_USERNAME), |u| {
            u.username == DEMO_USERNAME
        })
        .ok_or_else(|| TestError::InvalidFixture("demo user declared twice".to_string()))?;
    let test = store
        .skill_tests()
        .create(factory::new_skill_test("Hyper Text Markup Language"));
    let result = store
        .test_results()
        .create(factory::new_test_result(user.id, test.id));

    for (title, percentage, color) in DEMO_SYLLABUS {
        store.syllabus_results().create(factory::new_syllabus_result(
            result.id, title, percentage, color,
        ));
    }

    Ok(DemoFixture {
        user_id: user.id,
        test_id: test.id,
        result_id: result.id,
    })
}
