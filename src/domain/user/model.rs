/// User model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// A record carrying only an id, used as the base for partial updates
    /// of users the directory does not know.
    pub fn blank(id: i64) -> Self {
        Self::new(id, String::new(), String::new())
    }

    /// Applies the supplied fields of `patch`, leaving the rest untouched.
    pub fn patched(mut self, patch: UserPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        self
    }
}

/// Partial user update. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_replaces_only_supplied_fields() {
        let user = User::new(1, "John Doe", "john@example.com");
        let patched = user.patched(UserPatch {
            name: None,
            email: Some("jd@example.com".into()),
        });

        assert_eq!(patched, User::new(1, "John Doe", "jd@example.com"));
    }

    #[test]
    fn empty_patch_is_identity() {
        let user = User::new(7, "Anne", "anne@example.com");
        assert_eq!(user.clone().patched(UserPatch::default()), user);
    }

    #[test]
    fn blank_user_has_only_an_id() {
        let user = User::blank(42);
        assert_eq!(user.id, 42);
        assert!(user.name.is_empty());
        assert!(user.email.is_empty());
    }
}
