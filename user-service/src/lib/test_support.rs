//! Mocks and fixtures shared by the unit tests of the domain and inbound layers.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub const TEST_SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn create(&self, user: User) -> Result<User, UserError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        async fn list_all(&self) -> Result<Vec<User>, UserError>;
        async fn update(&self, user: User) -> Result<User, UserError>;
        async fn delete(&self, id: &UserId) -> Result<(), UserError>;
    }
}

/// A stored user named "Alice" with the given password hash.
pub fn alice(password_hash: Option<String>) -> User {
    User {
        id: UserId::new(),
        name: DisplayName::new("Alice".to_string()).unwrap(),
        email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
        password_hash,
        avatar_url: None,
        created_at: Utc::now(),
    }
}
