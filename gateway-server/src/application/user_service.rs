use std::sync::Arc;

use tracing::debug;

use super::clock::{Clock, iso_timestamp};
use crate::data::mock_users::{self, MAX_USER_ID, PLACEHOLDER_CREATED_AT};
use crate::domain::error::DomainError;
use crate::domain::id::RecordId;
use crate::domain::user::{self, NewUser, User, UserPatch};

pub struct UserService {
    users: &'static [User],
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: mock_users::users(),
            clock,
        }
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.to_vec()
    }

    pub fn get_user(&self, id: RecordId) -> Result<User, DomainError> {
        match id.get() {
            Some(id) if (1..=MAX_USER_ID).contains(&id) => {
                Ok(User::placeholder(id, PLACEHOLDER_CREATED_AT))
            }
            _ => Err(DomainError::NotFound {
                message: user::NOT_FOUND_MESSAGE,
            }),
        }
    }

    /// Builds the record a real store would have inserted. Nothing is kept.
    pub fn create_user(&self, req: NewUser) -> User {
        let now = self.clock.now();
        let user = req.into_user(now.timestamp_millis(), iso_timestamp(now));
        debug!(user_id = %user.id, "user created");
        user
    }

    /// Merges `patch` over the placeholder record. Any id is accepted.
    pub fn update_user(&self, id: RecordId, patch: UserPatch) -> User {
        patch.apply(id, iso_timestamp(self.clock.now()))
    }

    pub fn delete_user(&self, id: RecordId) {
        debug!(user_id = %id, "user deleted");
    }
}
