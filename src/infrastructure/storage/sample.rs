//! Hardcoded sample user directory

use crate::domain::{User, UserDirectory};

/// Id handed out to every created user.
pub const CREATED_USER_ID: i64 = 100;

/// Id of the only sample user that lookups resolve.
pub const ADDRESSABLE_USER_ID: i64 = 1;

/// Sample data for development and demos. Nothing is ever persisted.
pub struct SampleUserDirectory {
    roster: Vec<User>,
    addressable: User,
}

impl SampleUserDirectory {
    pub fn new() -> Self {
        Self {
            roster: vec![
                User::new(1, "John Doe", "john@example.com"),
                User::new(2, "Anne Jacqueline Hathaway", "Anne@example.com"),
                User::new(3, "Robert John Downey Jr.", "Robert@example.com"),
            ],
            addressable: User::new(ADDRESSABLE_USER_ID, "John Doe", "john@example.com"),
        }
    }
}

impl Default for SampleUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for SampleUserDirectory {
    fn list(&self) -> Vec<User> {
        self.roster.clone()
    }

    fn find(&self, id: i64) -> Option<User> {
        (self.addressable.id == id).then(|| self.addressable.clone())
    }

    fn assign_id(&self, requested: Option<i64>) -> i64 {
        // Placeholder allocation; bump past a client-supplied collision.
        if requested == Some(CREATED_USER_ID) {
            CREATED_USER_ID + 1
        } else {
            CREATED_USER_ID
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_three_distinct_ids() {
        let users = SampleUserDirectory::new().list();
        let mut ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        ids.dedup();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(users[1].name, "Anne Jacqueline Hathaway");
    }

    #[test]
    fn find_resolves_only_the_addressable_user() {
        let directory = SampleUserDirectory::new();

        assert_eq!(
            directory.find(1),
            Some(User::new(1, "John Doe", "john@example.com"))
        );
        for id in [0, 2, 3, 99, -1, i64::MAX] {
            assert_eq!(directory.find(id), None, "id {id}");
        }
    }

    #[test]
    fn assigned_id_never_echoes_the_requested_one() {
        let directory = SampleUserDirectory::new();

        assert_eq!(directory.assign_id(None), CREATED_USER_ID);
        for requested in [0, 1, 99, CREATED_USER_ID, CREATED_USER_ID + 1, i64::MIN] {
            assert_ne!(directory.assign_id(Some(requested)), requested);
        }
    }
}
