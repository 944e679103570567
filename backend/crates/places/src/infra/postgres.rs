//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{PlaceId, UserId};

use crate::domain::entity::owner::PlaceOwner;
use crate::domain::entity::place::Place;
use crate::domain::repository::PlaceRepository;
use crate::domain::value_object::{
    address::Address, description::Description, geo_point::GeoPoint, title::Title,
};
use crate::error::{PlaceError, PlaceResult};

/// Columns shared by every place query, qualified for joins
const PLACE_COLUMNS: &str = r#"
    p.place_id,
    p.title,
    p.description,
    p.address,
    p.lat,
    p.lng,
    p.image_path,
    p.creator,
    p.created_at,
    p.updated_at
"#;

/// PostgreSQL-backed place repository
///
/// Writes that touch both the place row and the owner's place list run in
/// a single transaction, so the two can never diverge.
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Both writes of the create unit; the caller owns the transaction
async fn insert_place_with_link(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    place: &Place,
) -> PlaceResult<()> {
    sqlx::query(
        r#"
        INSERT INTO places (
            place_id,
            title,
            description,
            address,
            lat,
            lng,
            image_path,
            creator,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(place.place_id.as_uuid())
    .bind(place.title.as_str())
    .bind(place.description.as_str())
    .bind(place.address.as_str())
    .bind(place.location.lat())
    .bind(place.location.lng())
    .bind(&place.image_path)
    .bind(place.creator.as_uuid())
    .bind(place.created_at)
    .bind(place.updated_at)
    .execute(&mut **tx)
    .await
    .map_err(|e| match &e {
        // Foreign key violation on creator means the user is gone
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
            PlaceError::OwnerNotFound
        }
        _ => PlaceError::Database(e),
    })?;

    // Append to the owner's place list at the next position
    sqlx::query(
        r#"
        INSERT INTO user_places (user_id, place_id, position)
        SELECT $1, $2, COALESCE(MAX(position) + 1, 0)
        FROM user_places
        WHERE user_id = $1
        "#,
    )
    .bind(place.creator.as_uuid())
    .bind(place.place_id.as_uuid())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Both deletes of the delete unit; the caller owns the transaction
async fn delete_place_with_link(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    place: &Place,
) -> PlaceResult<()> {
    sqlx::query("DELETE FROM user_places WHERE place_id = $1")
        .bind(place.place_id.as_uuid())
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM places WHERE place_id = $1")
        .bind(place.place_id.as_uuid())
        .execute(&mut **tx)
        .await?;

    Ok(())
}

impl PlaceRepository for PgPlaceRepository {
    async fn create(&self, place: &Place) -> PlaceResult<()> {
        let mut tx = self.pool.begin().await?;
        insert_place_with_link(&mut tx, place).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, place_id: &PlaceId) -> PlaceResult<Option<Place>> {
        let query = format!("SELECT {PLACE_COLUMNS} FROM places p WHERE p.place_id = $1");

        let row = sqlx::query_as::<_, PlaceRow>(&query)
            .bind(place_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_place()))
    }

    async fn find_owner_with_places(
        &self,
        user_id: &UserId,
    ) -> PlaceResult<Option<(PlaceOwner, Vec<Place>)>> {
        // The owner row distinguishes an unknown user from a user with
        // no places; the password hash is never selected
        let owner = sqlx::query_as::<_, OwnerRow>(
            "SELECT user_id, name, email, image_path FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(owner) = owner else {
            return Ok(None);
        };

        let query = format!(
            r#"
            SELECT {PLACE_COLUMNS}
            FROM places p
            JOIN user_places up ON up.place_id = p.place_id
            WHERE up.user_id = $1
            ORDER BY up.position
            "#
        );

        let rows = sqlx::query_as::<_, PlaceRow>(&query)
            .bind(user_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(Some((
            owner.into_owner(),
            rows.into_iter().map(|r| r.into_place()).collect(),
        )))
    }

    async fn update(&self, place: &Place) -> PlaceResult<()> {
        sqlx::query(
            r#"
            UPDATE places SET
                title = $2,
                description = $3,
                updated_at = $4
            WHERE place_id = $1
            "#,
        )
        .bind(place.place_id.as_uuid())
        .bind(place.title.as_str())
        .bind(place.description.as_str())
        .bind(place.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, place: &Place) -> PlaceResult<()> {
        let mut tx = self.pool.begin().await?;
        delete_place_with_link(&mut tx, place).await?;
        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct OwnerRow {
    user_id: Uuid,
    name: String,
    email: String,
    image_path: String,
}

impl OwnerRow {
    fn into_owner(self) -> PlaceOwner {
        PlaceOwner {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            email: self.email,
            image_path: self.image_path,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlaceRow {
    place_id: Uuid,
    title: String,
    description: String,
    address: String,
    lat: f64,
    lng: f64,
    image_path: String,
    creator: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlaceRow {
    fn into_place(self) -> Place {
        Place {
            place_id: PlaceId::from_uuid(self.place_id),
            title: Title::from_db(self.title),
            description: Description::from_db(self.description),
            address: Address::from_db(self.address),
            location: GeoPoint::from_db(self.lat, self.lng),
            image_path: self.image_path,
            creator: UserId::from_uuid(self.creator),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============================================================================
// Tests (require a running Postgres)
// ============================================================================
