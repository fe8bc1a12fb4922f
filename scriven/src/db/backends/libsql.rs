use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::UserRepository;
use crate::db::traits::{DatabaseBackend, UserStore};
use crate::error::Result;
use crate::models::User;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for LibSqlBackend {
    async fn create_user(&self, user: &User) -> Result<()> {
        let conn = self.db.connect()?;
        UserRepository::create(&conn, user).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.db.connect()?;
        UserRepository::get_by_username(&conn, username).await
    }

    async fn count_users(&self) -> Result<u64> {
        let conn = self.db.connect()?;
        UserRepository::count(&conn).await
    }
}

impl DatabaseBackend for LibSqlBackend {}
