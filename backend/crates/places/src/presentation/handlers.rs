//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::{PlaceId, UserId};
use platform::upload::{StoredImage, extension_for, remove_image};

use crate::application::config::PlacesConfig;
use crate::application::{
    CreatePlaceInput, CreatePlaceUseCase, DeletePlaceInput, DeletePlaceUseCase, GetPlaceUseCase,
    ListUserPlacesUseCase, UpdatePlaceInput, UpdatePlaceUseCase,
};
use crate::domain::geocoder::Geocoder;
use crate::domain::repository::PlaceRepository;
use crate::error::{PlaceError, PlaceResult};
use crate::presentation::dto::{
    DeletePlaceResponse, PlaceEnvelope, PlaceResponse, UpdatePlaceRequest, UserWithPlacesEnvelope,
    UserWithPlacesResponse,
};
use crate::presentation::middleware::AuthContext;

/// Shared state for place handlers
#[derive(Clone)]
pub struct PlacesAppState<R, G>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub geocoder: Arc<G>,
    pub config: Arc<PlacesConfig>,
}

// ============================================================================
// Get Place
// ============================================================================

/// GET /api/places/{place_id}
pub async fn get_place<R, G>(
    State(state): State<PlacesAppState<R, G>>,
    Path(place_id): Path<String>,
) -> PlaceResult<Json<PlaceEnvelope>>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let place_id = parse_place_id(&place_id)?;

    let use_case = GetPlaceUseCase::new(state.repo.clone());
    let place = use_case.execute(&place_id).await?;

    Ok(Json(PlaceEnvelope {
        place: PlaceResponse::from(&place),
    }))
}

// ============================================================================
// List User Places
// ============================================================================

/// GET /api/places/user/{user_id}
///
/// Returns the owning user with their places populated, like the place
/// detail endpoint returns a single place.
pub async fn list_user_places<R, G>(
    State(state): State<PlacesAppState<R, G>>,
    Path(user_id): Path<String>,
) -> PlaceResult<Json<UserWithPlacesEnvelope>>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let user_id =
        UserId::parse(&user_id).map_err(|_| PlaceError::Validation("Invalid user id".into()))?;

    let use_case = ListUserPlacesUseCase::new(state.repo.clone());
    let (owner, places) = use_case.execute(&user_id).await?;

    Ok(Json(UserWithPlacesEnvelope {
        user: UserWithPlacesResponse::from((&owner, places.as_slice())),
    }))
}

// ============================================================================
// Create Place
// ============================================================================

/// Multipart fields accepted by the create endpoint
#[derive(Default)]
struct CreatePlaceForm {
    title: Option<String>,
    description: Option<String>,
    address: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

/// POST /api/places (multipart/form-data, authenticated)
///
/// The image is written to disk before the use case runs; if creation
/// fails the stored file is discarded.
pub async fn create_place<R, G>(
    State(state): State<PlacesAppState<R, G>>,
    Extension(auth): Extension<AuthContext>,
    multipart: Multipart,
) -> PlaceResult<impl IntoResponse>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let form = read_create_form(multipart).await?;

    let title = form
        .title
        .ok_or_else(|| PlaceError::Validation("Missing field: title".into()))?;
    let description = form
        .description
        .ok_or_else(|| PlaceError::Validation("Missing field: description".into()))?;
    let address = form
        .address
        .ok_or_else(|| PlaceError::Validation("Missing field: address".into()))?;
    let (content_type, bytes) = form
        .image
        .ok_or_else(|| PlaceError::Validation("Missing field: image".into()))?;

    let extension = extension_for(&content_type).ok_or_else(|| {
        PlaceError::Validation(format!("Unsupported image type: {content_type}"))
    })?;

    let stored = StoredImage::store(&state.config.upload_dir, extension, &bytes)
        .await
        .map_err(|e| PlaceError::Internal(format!("Could not store image: {}", e)))?;

    let use_case = CreatePlaceUseCase::new(state.repo.clone(), state.geocoder.clone());

    let input = CreatePlaceInput {
        title,
        description,
        address,
        image_path: stored.path_string(),
        creator: auth.user_id,
    };

    let place = match use_case.execute(input).await {
        Ok(place) => place,
        Err(e) => {
            stored.discard().await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(PlaceEnvelope {
            place: PlaceResponse::from(&place),
        }),
    ))
}

// ============================================================================
// Update Place
// ============================================================================

/// PATCH /api/places/{place_id} (authenticated)
pub async fn update_place<R, G>(
    State(state): State<PlacesAppState<R, G>>,
    Extension(auth): Extension<AuthContext>,
    Path(place_id): Path<String>,
    Json(req): Json<UpdatePlaceRequest>,
) -> PlaceResult<Json<PlaceEnvelope>>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let place_id = parse_place_id(&place_id)?;

    let use_case = UpdatePlaceUseCase::new(state.repo.clone());

    let input = UpdatePlaceInput {
        place_id,
        title: req.title,
        description: req.description,
        actor: auth.user_id,
    };

    let place = use_case.execute(input).await?;

    Ok(Json(PlaceEnvelope {
        place: PlaceResponse::from(&place),
    }))
}

// ============================================================================
// Delete Place
// ============================================================================

/// DELETE /api/places/{place_id} (authenticated)
pub async fn delete_place<R, G>(
    State(state): State<PlacesAppState<R, G>>,
    Extension(auth): Extension<AuthContext>,
    Path(place_id): Path<String>,
) -> PlaceResult<Json<DeletePlaceResponse>>
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let place_id = parse_place_id(&place_id)?;

    let use_case = DeletePlaceUseCase::new(state.repo.clone());

    let image_path = use_case
        .execute(DeletePlaceInput {
            place_id,
            actor: auth.user_id,
        })
        .await?;

    // The row is gone; the file removal is best-effort
    remove_image(&image_path).await;

    Ok(Json(DeletePlaceResponse {
        message: "Deleted place.".to_string(),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_place_id(raw: &str) -> PlaceResult<PlaceId> {
    PlaceId::parse(raw).map_err(|_| PlaceError::Validation("Invalid place id".into()))
}

async fn read_create_form(mut multipart: Multipart) -> PlaceResult<CreatePlaceForm> {
    let mut form = CreatePlaceForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PlaceError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "title" => form.title = Some(read_text_field(field).await?),
            "description" => form.description = Some(read_text_field(field).await?),
            "address" => form.address = Some(read_text_field(field).await?),
            "image" => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| PlaceError::Validation(format!("Invalid image upload: {}", e)))?;
                form.image = Some((content_type, bytes.to_vec()));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> PlaceResult<String> {
    field
        .text()
        .await
        .map_err(|e| PlaceError::Validation(format!("Invalid multipart field: {}", e)))
}
