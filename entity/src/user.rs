use crate::Record;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewModel {
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl Record for Model {
    type New = NewModel;

    const COLLECTION: &'static str = "users";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewModel) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
            display_name: new.display_name,
            avatar: new.avatar,
        }
    }
}
