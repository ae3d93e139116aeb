use super::error::DomainError;
use super::id::RecordId;
use super::non_empty;

pub const DEFAULT_ROLE: &str = "user";

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "姓名和邮箱是必填项";
pub(crate) const NOT_FOUND_MESSAGE: &str = "用户不存在";

const PLACEHOLDER_NAME: &str = "张三";
const PLACEHOLDER_EMAIL: &str = "zhangsan@example.com";
const PLACEHOLDER_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl User {
    /// The record every single-user lookup answers with, carrying the requested id.
    pub(crate) fn placeholder(id: i64, created_at: &str) -> Self {
        Self {
            id: RecordId::new(id),
            name: PLACEHOLDER_NAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            role: PLACEHOLDER_ROLE.to_string(),
            created_at: Some(created_at.to_string()),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::Validation {
                message: REQUIRED_FIELDS_MESSAGE,
            });
        }

        Ok(Self {
            name,
            email,
            role: non_empty(role),
        })
    }

    pub(crate) fn into_user(self, id: i64, created_at: String) -> User {
        User {
            id: RecordId::new(id),
            name: self.name,
            email: self.email,
            role: self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

/// Partial user update. Absent or empty fields fall back to the placeholder record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    pub(crate) fn apply(self, id: RecordId, updated_at: String) -> User {
        User {
            id,
            name: non_empty(self.name).unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            email: non_empty(self.email).unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string()),
            role: non_empty(self.role).unwrap_or_else(|| PLACEHOLDER_ROLE.to_string()),
            created_at: None,
            updated_at: Some(updated_at),
        }
    }
}
