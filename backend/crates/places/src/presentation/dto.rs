//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::owner::PlaceOwner;
use crate::domain::entity::place::Place;
use crate::domain::value_object::geo_point::GeoPoint;

// ============================================================================
// Places
// ============================================================================

/// Public view of a place
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    /// Coordinates as `{"lat": .., "lng": ..}`
    pub location: GeoPoint,
    pub image: String,
    pub creator: String,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.place_id.to_string(),
            title: place.title.as_str().to_string(),
            description: place.description.as_str().to_string(),
            address: place.address.as_str().to_string(),
            location: place.location,
            image: place.image_path.clone(),
            creator: place.creator.to_string(),
        }
    }
}

/// Single place envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceEnvelope {
    pub place: PlaceResponse,
}

/// Public view of a user with their places, as returned by the
/// user-places endpoint; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithPlacesResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub places: Vec<PlaceResponse>,
}

impl From<(&PlaceOwner, &[Place])> for UserWithPlacesResponse {
    fn from((owner, places): (&PlaceOwner, &[Place])) -> Self {
        Self {
            id: owner.user_id.to_string(),
            name: owner.name.clone(),
            email: owner.email.clone(),
            image: owner.image_path.clone(),
            places: places.iter().map(PlaceResponse::from).collect(),
        }
    }
}

/// Owner-with-places envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithPlacesEnvelope {
    pub user: UserWithPlacesResponse,
}

// ============================================================================
// Update / Delete
// ============================================================================

/// Update place request; address, coordinates and image are immutable
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceRequest {
    pub title: String,
    pub description: String,
}

/// Delete place response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlaceResponse {
    pub message: String,
}
