use serde::{Deserialize, Serialize};

/// User entity - a registered account.
///
/// `is_admin` marks the accounts allowed to manage posts. The store
/// assigns ids, so a user that has not been persisted yet is a
/// [`NewUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// A user about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}
