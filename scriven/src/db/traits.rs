use async_trait::async_trait;

use crate::error::Result;
use crate::models::User;

/// CRUD operations for accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<()>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn count_users(&self) -> Result<u64>;
}

/// A complete database backend: every store trait the service needs.
pub trait DatabaseBackend: UserStore {}
