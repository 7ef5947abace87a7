//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::Credential;
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use kernel::id::CredentialId;

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    username: String,
    password_salt: Vec<u8>,
    password_hash: Vec<u8>,
}

impl CredentialRow {
    fn into_credential(self) -> Credential {
        Credential {
            id: CredentialId::new(self.id),
            username: self.username,
            password_salt: self.password_salt,
            password_hash: self.password_hash,
        }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password_salt, password_hash
            FROM credenciales
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRow::into_credential))
    }

    async fn any(&self) -> AuthResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM credenciales)")
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    async fn insert(&self, username: &str, salt: &[u8], hash: &[u8]) -> AuthResult<Credential> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO credenciales (username, password_salt, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_salt, password_hash
            "#,
        )
        .bind(username)
        .bind(salt)
        .bind(hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_credential())
    }
}
