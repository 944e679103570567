//! Places Router
//!
//! Reads are public; create, update and delete require a valid bearer
//! token, enforced per-route so GET on the same path stays open.

use axum::handler::Handler;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::config::PlacesConfig;
use crate::domain::geocoder::Geocoder;
use crate::domain::repository::PlaceRepository;
use crate::infra::geocoder::GoogleGeocoder;
use crate::infra::postgres::PgPlaceRepository;
use crate::presentation::handlers::{self, PlacesAppState};
use crate::presentation::middleware::require_auth;

/// Create the Places router with PostgreSQL repository and Google geocoder
pub fn places_router(
    repo: PgPlaceRepository,
    geocoder: GoogleGeocoder,
    tokens: Arc<TokenService>,
    config: PlacesConfig,
) -> Router {
    places_router_generic(repo, geocoder, tokens, config)
}

/// Create a generic Places router for any repository and geocoder
pub fn places_router_generic<R, G>(
    repo: R,
    geocoder: G,
    tokens: Arc<TokenService>,
    config: PlacesConfig,
) -> Router
where
    R: PlaceRepository + Clone + Send + Sync + 'static,
    G: Geocoder + Clone + Send + Sync + 'static,
{
    let state = PlacesAppState {
        repo: Arc::new(repo),
        geocoder: Arc::new(geocoder),
        config: Arc::new(config),
    };

    let auth = middleware::from_fn(move |req, next| require_auth(tokens.clone(), req, next));

    Router::new()
        .route("/", post(handlers::create_place::<R, G>.layer(auth.clone())))
        .route("/user/{user_id}", get(handlers::list_user_places::<R, G>))
        .route(
            "/{place_id}",
            get(handlers::get_place::<R, G>)
                .patch(handlers::update_place::<R, G>.layer(auth.clone()))
                .delete(handlers::delete_place::<R, G>.layer(auth)),
        )
        .with_state(state)
}
