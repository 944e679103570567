//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::token::TokenService;
use platform::upload::{StoredImage, extension_for};

use crate::application::config::UsersConfig;
use crate::application::{
    ListUsersUseCase, LogInInput, LogInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{AuthResponse, LogInRequest, UserResponse, UsersListResponse};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<UsersConfig>,
}

// ============================================================================
// List Users
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
) -> UserResult<Json<UsersListResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(UsersListResponse {
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

// ============================================================================
// Sign Up
// ============================================================================

/// Multipart fields accepted by the signup endpoint
#[derive(Default)]
struct SignUpForm {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

/// POST /api/users/signup (multipart/form-data)
///
/// The avatar image is written to disk before the use case runs; if the
/// signup fails the stored file is discarded.
pub async fn sign_up<R>(
    State(state): State<UsersAppState<R>>,
    multipart: Multipart,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let form = read_sign_up_form(multipart).await?;

    let name = form
        .name
        .ok_or_else(|| UserError::Validation("Missing field: name".into()))?;
    let email = form
        .email
        .ok_or_else(|| UserError::Validation("Missing field: email".into()))?;
    let password = form
        .password
        .ok_or_else(|| UserError::Validation("Missing field: password".into()))?;
    let (content_type, bytes) = form
        .image
        .ok_or_else(|| UserError::Validation("Missing field: image".into()))?;

    let extension = extension_for(&content_type)
        .ok_or_else(|| UserError::Validation(format!("Unsupported image type: {content_type}")))?;

    let stored = StoredImage::store(&state.config.upload_dir, extension, &bytes)
        .await
        .map_err(|e| UserError::Internal(format!("Could not store image: {}", e)))?;

    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        name,
        email,
        password,
        image_path: stored.path_string(),
    };

    let output = match use_case.execute(input).await {
        Ok(output) => output,
        Err(e) => {
            stored.discard().await;
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user_id: output.user_id.to_string(),
            email: output.email,
            token: output.token,
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/users/login
pub async fn log_in<R>(
    State(state): State<UsersAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> UserResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = LogInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        user_id: output.user_id.to_string(),
        email: output.email,
        token: output.token,
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn read_sign_up_form(mut multipart: Multipart) -> UserResult<SignUpForm> {
    let mut form = SignUpForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UserError::Validation(format!("Invalid multipart body: {}", e)))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "name" => form.name = Some(read_text_field(field).await?),
            "email" => form.email = Some(read_text_field(field).await?),
            "password" => form.password = Some(read_text_field(field).await?),
            "image" => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| UserError::Validation(format!("Invalid image upload: {}", e)))?;
                form.image = Some((content_type, bytes.to_vec()));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> UserResult<String> {
    field
        .text()
        .await
        .map_err(|e| UserError::Validation(format!("Invalid multipart field: {}", e)))
}
