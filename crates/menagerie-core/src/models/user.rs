//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Visitor,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Visitor
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub age: u32,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    pub last_name: String,
    pub first_name: String,
    pub age: u32,
}
