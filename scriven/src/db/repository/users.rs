use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::User;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                user.id.clone(),
                user.username.clone(),
                user.email.clone(),
                user.password_hash.clone(),
                user.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        let mut rows = conn
            .query(
                "SELECT id, username, email, password_hash, created_at
                 FROM users WHERE username = ?1",
                params![username],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_user(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn count(conn: &Connection) -> Result<u64> {
        let mut rows = conn.query("SELECT COUNT(*) FROM users", ()).await?;
        if let Some(row) = rows.next().await? {
            Ok(row.get::<i64>(0)? as u64)
        } else {
            Ok(0)
        }
    }

    fn row_to_user(row: &libsql::Row) -> Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: DateTime::parse_from_rfc3339(&row.get::<String>(4)?)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> Connection {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap();
        let conn = db.connect().unwrap();
        crate::db::schema::init_schema(&conn).await.unwrap();
        conn
    }

    fn test_user(username: &str) -> User {
        User::new(
            nanoid::nanoid!(),
            username.to_string(),
            format!("{username}@example.com"),
            "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        )
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let conn = setup_test_db().await;
        let user = test_user("alice");
        UserRepository::create(&conn, &user).await.unwrap();

        let fetched = UserRepository::get_by_username(&conn, "alice")
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(fetched.id, user.id);
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.password_hash, user.password_hash);
    }

    #[tokio::test]
    async fn get_unknown_username_returns_none() {
        let conn = setup_test_db().await;
        let fetched = UserRepository::get_by_username(&conn, "nobody")
            .await
            .unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let conn = setup_test_db().await;
        assert_eq!(UserRepository::count(&conn).await.unwrap(), 0);

        UserRepository::create(&conn, &test_user("alice"))
            .await
            .unwrap();
        UserRepository::create(&conn, &test_user("bob"))
            .await
            .unwrap();
        assert_eq!(UserRepository::count(&conn).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_username_insert_is_rejected() {
        let conn = setup_test_db().await;
        UserRepository::create(&conn, &test_user("alice"))
            .await
            .unwrap();

        let result = UserRepository::create(&conn, &test_user("alice")).await;
        assert!(result.is_err());
        assert_eq!(UserRepository::count(&conn).await.unwrap(), 1);
    }
}
