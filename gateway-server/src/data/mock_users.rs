use std::sync::LazyLock;

use crate::domain::id::RecordId;
use crate::domain::user::User;

/// Highest id answered by single-user lookups.
pub const MAX_USER_ID: i64 = 3;

/// Creation time reported by single-user lookups.
pub(crate) const PLACEHOLDER_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

static USERS: LazyLock<Vec<User>> = LazyLock::new(|| {
    [
        (1, "张三", "zhangsan@example.com", "admin"),
        (2, "李四", "lisi@example.com", "user"),
        (3, "王五", "wangwu@example.com", "user"),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id: RecordId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        created_at: None,
        updated_at: None,
    })
    .collect()
});

pub fn users() -> &'static [User] {
    &USERS
}
