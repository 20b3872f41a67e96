//! Demo records populated into the store at startup.

use chrono::{TimeZone, Utc};
use entity::{store::EntityStore, syllabus_result::Color};

use crate::server::{
    data::{
        skill_test::SkillTestRepository, syllabus_result::SyllabusResultRepository,
        test_result::TestResultRepository, user::UserRepository,
    },
    error::Error,
};

const DEMO_AVATAR_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

const DEMO_SYLLABUS: [(&str, f64, Color); 4] = [
    ("HTML Tools, Forms, History", 80.0, Color::Primary),
    ("Tags & References in HTML", 60.0, Color::Secondary),
    ("Tables & References in HTML", 24.0, Color::Danger),
    ("Tables & CSS Basics", 96.0, Color::Success),
];

/// IDs of the records created by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoData {
    pub user_id: i32,
    pub test_id: i32,
    pub result_id: i32,
}

/// Populates the store with the demo user, the HTML skill test, the user's result
/// for it and the result's syllabus breakdown.
///
/// # Returns
/// - `Ok(DemoData)` - IDs of the created user, test and result
/// - `Err(Error::StoreError)` - The demo username is already taken
pub fn seed_demo_data(store: &EntityStore) -> Result<DemoData, Error> {
    let user = UserRepository::new(store).create(entity::user::NewModel {
        username: "rahil".to_string(),
        password: "password".to_string(),
        display_name: "Rahil Siddique".to_string(),
        avatar: Some(DEMO_AVATAR_URL.to_string()),
    })?;

    let submitted_at = Utc
        .with_ymd_and_hms(2021, 6, 5, 0, 0, 0)
        .single()
        .ok_or_else(|| Error::InternalError("Invalid demo submission date".to_string()))?;

    let test = SkillTestRepository::new(store).create(entity::skill_test::NewModel {
        title: "Hyper Text Markup Language".to_string(),
        icon: "html5".to_string(),
        questions: 8,
        duration: 15,
        submitted_at,
    });

    let result = TestResultRepository::new(store).create(entity::skill_test_result::NewModel {
        user_id: user.id,
        test_id: test.id,
        rank: 1,
        percentile: 30.0,
        score: 10,
        max_score: 15,
    });

    let syllabus_repository = SyllabusResultRepository::new(store);
    for (title, percentage, color) in DEMO_SYLLABUS {
        syllabus_repository.create(entity::syllabus_result::NewModel {
            test_result_id: result.id,
            title: title.to_string(),
            percentage,
            color,
        });
    }

    tracing::info!(
        user_id = %user.id,
        test_id = %test.id,
        result_id = %result.id,
        "Seeded demo data"
    );

    Ok(DemoData {
        user_id: user.id,
        test_id: test.id,
        result_id: result.id,
    })
}

#[cfg(test)]
mod tests {
    use entity::store::EntityStore;

    use crate::server::{
        data::seed::{seed_demo_data, DemoData},
        error::Error,
    };

    /// Expect the demo records to be created with the first IDs of each collection
    #[test]
    fn seeds_demo_records() {
        let store = EntityStore::new();

        let demo = seed_demo_data(&store).unwrap();

        assert_eq!(
            demo,
            DemoData {
                user_id: 1,
                test_id: 1,
                result_id: 1
            }
        );

        let result = store.test_results().get_by_id(demo.result_id).unwrap();
        assert_eq!(result.rank, 1);
        assert_eq!(result.percentile, 30.0);
        assert_eq!(result.score, 10);
        assert_eq!(result.max_score, 15);

        let syllabus = store.syllabus_results().list();
        assert_eq!(syllabus.len(), 4);
        assert!(syllabus.iter().all(|s| s.test_result_id == demo.result_id));
    }

    /// Expect a second seed to fail on the taken demo username
    #[test]
    fn fails_when_seeded_twice() {
        let store = EntityStore::new();
        seed_demo_data(&store).unwrap();

        let result = seed_demo_data(&store);

        assert!(matches!(result, Err(Error::StoreError(_))));
        assert_eq!(store.skill_tests().len(), 1);
    }
}
