pub use crate::skill_test::Model as SkillTest;
pub use crate::skill_test_result::Model as SkillTestResult;
pub use crate::syllabus_result::Model as SyllabusResult;
pub use crate::user::Model as User;
pub use crate::{Patch, Record};
pub use crate::store::{Collection, EntityStore, StoreError};
