//! User DTOs
//!
//! Request and response bodies reuse the `User` shape: responses are
//! built from the domain model, requests carry the same fields with the
//! id left optional because the server decides it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserPatch};

/// User API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

pub type GetUserResponse = UserDto;
pub type CreateUserResponse = UserDto;
pub type UpdateUserResponse = UserDto;
pub type PatchUserResponse = UserDto;

/// Full user body used by create and replace
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    /// Ignored: create assigns an id, replace takes it from the path
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl UserPayload {
    pub fn into_user(self, id: i64) -> User {
        User::new(id, self.name, self.email)
    }
}

pub type CreateUserRequest = UserPayload;
pub type UpdateUserRequest = UserPayload;

/// Partial user body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchUserRequest {
    /// Ignored: the id comes from the path
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(r: PatchUserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_dto_serializes_id_as_number() {
        let dto = UserDto::from(User::new(1, "John Doe", "john@example.com"));
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com"})
        );
    }

    #[test]
    fn payload_id_is_optional() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"Jane","email":"jane@example.com"}"#).unwrap();
        assert_eq!(payload.id, None);
        assert_eq!(payload.into_user(5), User::new(5, "Jane", "jane@example.com"));
    }

    #[test]
    fn payload_requires_name_and_email() {
        assert!(serde_json::from_str::<UserPayload>(r#"{"name":"Jane"}"#).is_err());
        assert!(serde_json::from_str::<UserPayload>(r#"{"id":"x","name":"a","email":"b"}"#).is_err());
    }

    #[test]
    fn patch_accepts_empty_object() {
        let patch: PatchUserRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none() && patch.email.is_none());
    }
}
