//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{PlaceId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

/// Columns shared by every user query. The places array is aggregated from
/// the user_places link table, ordered by position, empty when the user
/// owns nothing.
const USER_SELECT: &str = r#"
    SELECT
        u.user_id,
        u.name,
        u.email,
        u.password_hash,
        u.image_path,
        COALESCE(
            array_agg(up.place_id ORDER BY up.position)
                FILTER (WHERE up.place_id IS NOT NULL),
            '{}'
        ) AS places,
        u.created_at,
        u.updated_at
    FROM users u
    LEFT JOIN user_places up ON up.user_id = u.user_id
"#;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UserResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                image_path,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.image_path)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique violation on the email index
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                UserError::EmailTaken
            }
            _ => UserError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let query = format!("{USER_SELECT} WHERE u.user_id = $1 GROUP BY u.user_id");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let query = format!("{USER_SELECT} WHERE u.email = $1 GROUP BY u.user_id");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> UserResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let query = format!("{USER_SELECT} GROUP BY u.user_id ORDER BY u.created_at");

        let rows = sqlx::query_as::<_, UserRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    image_path: String,
    places: Vec<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> UserResult<User> {
        let name = UserName::from_db(self.name);
        let email = Email::from_db(self.email);

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| UserError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name,
            email,
            password_hash,
            image_path: self.image_path,
            places: self.places.into_iter().map(PlaceId::from_uuid).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
