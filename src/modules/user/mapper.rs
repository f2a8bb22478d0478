//! Conversions between wire contracts and the domain model.

use uuid::Uuid;

use super::contracts::{CreateUserRequest, UserResponse};
use super::model::User;

impl CreateUserRequest {
    /// Turn the payload into a domain user, assigning the server-generated id.
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: self.full_name,
        }
    }
}

impl User {
    /// Project the user into its wire representation.
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            full_name: self.full_name.clone(),
        }
    }
}
