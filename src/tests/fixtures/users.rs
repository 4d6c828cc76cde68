use crate::modules::accounts::core::user::User;
use chrono::{TimeZone, Utc};

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        let joined = Utc.with_ymd_and_hms(2023, 12, 1, 8, 0, 0).unwrap();
        Self {
            inner: User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                display_name: "Ada".to_string(),
                photo_url: None,
                created_at: joined,
                last_login_at: joined,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn display_name(mut self, v: impl Into<String>) -> Self {
        self.inner.display_name = v.into();
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}
