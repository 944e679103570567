//! Unit tests for Places crate
//!
//! Use cases run against an in-memory repository and a stub geocoder;
//! router tests drive the real middleware through tower.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use kernel::id::{PlaceId, UserId};

    use crate::domain::entity::owner::PlaceOwner;
    use crate::domain::entity::place::Place;
    use crate::domain::geocoder::{GeocodeError, Geocoder};
    use crate::domain::repository::PlaceRepository;
    use crate::domain::value_object::geo_point::GeoPoint;
    use crate::error::{PlaceError, PlaceResult};

    /// In-memory place repository; `users` stands in for the users table
    /// so owner lookups can be answered
    #[derive(Clone, Default)]
    pub struct InMemoryPlaceRepository {
        pub places: Arc<Mutex<Vec<Place>>>,
        pub users: Arc<Mutex<Vec<PlaceOwner>>>,
    }

    impl InMemoryPlaceRepository {
        pub fn with_user(self, user_id: &UserId) -> Self {
            self.users.lock().unwrap().push(PlaceOwner {
                user_id: *user_id,
                name: "Max Schwarz".to_string(),
                email: format!("{}@test.com", user_id.as_uuid().simple()),
                image_path: "uploads/images/avatar.png".to_string(),
            });
            self
        }

        fn owner(&self, user_id: &UserId) -> Option<PlaceOwner> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.user_id == user_id)
                .cloned()
        }
    }

    impl PlaceRepository for InMemoryPlaceRepository {
        async fn create(&self, place: &Place) -> PlaceResult<()> {
            if self.owner(&place.creator).is_none() {
                return Err(PlaceError::OwnerNotFound);
            }
            self.places.lock().unwrap().push(place.clone());
            Ok(())
        }

        async fn find_by_id(&self, place_id: &PlaceId) -> PlaceResult<Option<Place>> {
            Ok(self
                .places
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.place_id == place_id)
                .cloned())
        }

        async fn find_owner_with_places(
            &self,
            user_id: &UserId,
        ) -> PlaceResult<Option<(PlaceOwner, Vec<Place>)>> {
            let Some(owner) = self.owner(user_id) else {
                return Ok(None);
            };

            let places = self
                .places
                .lock()
                .unwrap()
                .iter()
                .filter(|p| &p.creator == user_id)
                .cloned()
                .collect();

            Ok(Some((owner, places)))
        }

        async fn update(&self, place: &Place) -> PlaceResult<()> {
            let mut places = self.places.lock().unwrap();
            if let Some(existing) = places.iter_mut().find(|p| p.place_id == place.place_id) {
                *existing = place.clone();
            }
            Ok(())
        }

        async fn delete(&self, place: &Place) -> PlaceResult<()> {
            self.places
                .lock()
                .unwrap()
                .retain(|p| p.place_id != place.place_id);
            Ok(())
        }
    }

    /// Stub geocoder with a scripted outcome
    #[derive(Clone)]
    pub enum StubGeocoder {
        Fixed(GeoPoint),
        NoResult,
        Failing,
    }

    impl StubGeocoder {
        pub fn empire_state() -> Self {
            Self::Fixed(GeoPoint::new(40.7484474, -73.9871516).unwrap())
        }
    }

    impl Geocoder for StubGeocoder {
        async fn geocode(&self, _address: &str) -> Result<GeoPoint, GeocodeError> {
            match self {
                StubGeocoder::Fixed(point) => Ok(*point),
                StubGeocoder::NoResult => Err(GeocodeError::NoResult),
                StubGeocoder::Failing => Err(GeocodeError::Provider("quota exhausted".into())),
            }
        }
    }

    pub fn sample_input(creator: UserId) -> crate::application::CreatePlaceInput {
        crate::application::CreatePlaceInput {
            title: "Empire State Building".to_string(),
            description: "One of the most famous sky scrapers in the world!".to_string(),
            address: "20 W 34th St, New York, NY 10001".to_string(),
            image_path: "uploads/images/esb.jpeg".to_string(),
            creator,
        }
    }
}

#[cfg(test)]
mod create_place_tests {
    use std::sync::Arc;

    use kernel::id::UserId;

    use crate::application::{CreatePlaceInput, CreatePlaceUseCase};
    use crate::error::PlaceError;

    use super::support::{InMemoryPlaceRepository, StubGeocoder, sample_input};

    #[tokio::test]
    async fn test_create_place_geocodes_and_persists() {
        let creator = UserId::new();
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&creator));
        let use_case = CreatePlaceUseCase::new(repo.clone(), Arc::new(StubGeocoder::empire_state()));

        let place = use_case.execute(sample_input(creator)).await.unwrap();

        assert_eq!(place.location.lat(), 40.7484474);
        assert_eq!(place.creator, creator);
        assert_eq!(repo.places.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_place_short_description_rejected_before_geocoding() {
        let creator = UserId::new();
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&creator));
        // A failing geocoder proves validation short-circuits the call
        let use_case = CreatePlaceUseCase::new(repo.clone(), Arc::new(StubGeocoder::Failing));

        let err = use_case
            .execute(CreatePlaceInput {
                description: "tiny".to_string(),
                ..sample_input(creator)
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::Validation(_)));
        assert!(repo.places.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_place_unresolvable_address() {
        let creator = UserId::new();
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&creator));
        let use_case = CreatePlaceUseCase::new(repo.clone(), Arc::new(StubGeocoder::NoResult));

        let err = use_case.execute(sample_input(creator)).await.unwrap_err();

        assert!(matches!(err, PlaceError::GeocodeNoResult));
        assert!(repo.places.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_place_provider_failure() {
        let creator = UserId::new();
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&creator));
        let use_case = CreatePlaceUseCase::new(repo, Arc::new(StubGeocoder::Failing));

        let err = use_case.execute(sample_input(creator)).await.unwrap_err();

        assert!(matches!(err, PlaceError::GeocodeProvider(_)));
    }

    #[tokio::test]
    async fn test_create_place_unknown_creator() {
        let repo = Arc::new(InMemoryPlaceRepository::default());
        let use_case = CreatePlaceUseCase::new(repo, Arc::new(StubGeocoder::empire_state()));

        let err = use_case
            .execute(sample_input(UserId::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::OwnerNotFound));
    }
}

#[cfg(test)]
mod read_tests {
    use std::sync::Arc;

    use kernel::id::{PlaceId, UserId};

    use crate::application::{CreatePlaceUseCase, GetPlaceUseCase, ListUserPlacesUseCase};
    use crate::error::PlaceError;

    use super::support::{InMemoryPlaceRepository, StubGeocoder, sample_input};

    #[tokio::test]
    async fn test_get_place_not_found() {
        let repo = Arc::new(InMemoryPlaceRepository::default());
        let use_case = GetPlaceUseCase::new(repo);

        let err = use_case.execute(&PlaceId::new()).await.unwrap_err();
        assert!(matches!(err, PlaceError::PlaceNotFound));
    }

    #[tokio::test]
    async fn test_list_places_for_unknown_user() {
        let repo = Arc::new(InMemoryPlaceRepository::default());
        let use_case = ListUserPlacesUseCase::new(repo);

        let err = use_case.execute(&UserId::new()).await.unwrap_err();
        assert!(matches!(err, PlaceError::OwnerNotFound));
    }

    #[tokio::test]
    async fn test_list_places_for_user_without_places() {
        let user = UserId::new();
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&user));
        let use_case = ListUserPlacesUseCase::new(repo);

        let (owner, places) = use_case.execute(&user).await.unwrap();
        assert_eq!(owner.user_id, user);
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_list_places_returns_owner_and_only_their_places() {
        let ann = UserId::new();
        let bob = UserId::new();
        let repo = Arc::new(
            InMemoryPlaceRepository::default()
                .with_user(&ann)
                .with_user(&bob),
        );

        let create = CreatePlaceUseCase::new(repo.clone(), Arc::new(StubGeocoder::empire_state()));
        create.execute(sample_input(ann)).await.unwrap();
        create.execute(sample_input(ann)).await.unwrap();
        create.execute(sample_input(bob)).await.unwrap();

        let (owner, places) = ListUserPlacesUseCase::new(repo).execute(&ann).await.unwrap();
        assert_eq!(owner.user_id, ann);
        assert_eq!(places.len(), 2);
        assert!(places.iter().all(|p| p.creator == ann));
    }
}

#[cfg(test)]
mod mutation_tests {
    use std::sync::Arc;

    use kernel::id::{PlaceId, UserId};

    use crate::application::{
        CreatePlaceUseCase, DeletePlaceInput, DeletePlaceUseCase, UpdatePlaceInput,
        UpdatePlaceUseCase,
    };
    use crate::domain::entity::place::Place;
    use crate::error::PlaceError;

    use super::support::{InMemoryPlaceRepository, StubGeocoder, sample_input};

    async fn seeded(creator: UserId) -> (Arc<InMemoryPlaceRepository>, Place) {
        let repo = Arc::new(InMemoryPlaceRepository::default().with_user(&creator));
        let create = CreatePlaceUseCase::new(repo.clone(), Arc::new(StubGeocoder::empire_state()));
        let place = create.execute(sample_input(creator)).await.unwrap();
        (repo, place)
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let owner = UserId::new();
        let (repo, place) = seeded(owner).await;

        let updated = UpdatePlaceUseCase::new(repo.clone())
            .execute(UpdatePlaceInput {
                place_id: place.place_id,
                title: "ESB".to_string(),
                description: "Still very tall.".to_string(),
                actor: owner,
            })
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "ESB");
        // Address and coordinates are untouched
        assert_eq!(updated.address, place.address);
        assert_eq!(updated.location, place.location);

        let stored = repo.places.lock().unwrap()[0].clone();
        assert_eq!(stored.title.as_str(), "ESB");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let owner = UserId::new();
        let (repo, place) = seeded(owner).await;

        let err = UpdatePlaceUseCase::new(repo.clone())
            .execute(UpdatePlaceInput {
                place_id: place.place_id,
                title: "Hijacked".to_string(),
                description: "Should never stick.".to_string(),
                actor: UserId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::NotOwner));
        // Unchanged
        let stored = repo.places.lock().unwrap()[0].clone();
        assert_eq!(stored.title, place.title);
    }

    #[tokio::test]
    async fn test_update_unknown_place() {
        let owner = UserId::new();
        let (repo, _) = seeded(owner).await;

        let err = UpdatePlaceUseCase::new(repo)
            .execute(UpdatePlaceInput {
                place_id: PlaceId::new(),
                title: "ESB".to_string(),
                description: "Still very tall.".to_string(),
                actor: owner,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::PlaceNotFound));
    }

    #[tokio::test]
    async fn test_update_invalid_description_rejected() {
        let owner = UserId::new();
        let (repo, place) = seeded(owner).await;

        let err = UpdatePlaceUseCase::new(repo)
            .execute(UpdatePlaceInput {
                place_id: place.place_id,
                title: "ESB".to_string(),
                description: "tiny".to_string(),
                actor: owner,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_by_owner_returns_image_path() {
        let owner = UserId::new();
        let (repo, place) = seeded(owner).await;

        let image_path = DeletePlaceUseCase::new(repo.clone())
            .execute(DeletePlaceInput {
                place_id: place.place_id,
                actor: owner,
            })
            .await
            .unwrap();

        assert_eq!(image_path, "uploads/images/esb.jpeg");
        assert!(repo.places.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_rejected() {
        let owner = UserId::new();
        let (repo, place) = seeded(owner).await;

        let err = DeletePlaceUseCase::new(repo.clone())
            .execute(DeletePlaceInput {
                place_id: place.place_id,
                actor: UserId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PlaceError::NotOwner));
        assert_eq!(repo.places.lock().unwrap().len(), 1);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use kernel::id::UserId;
    use platform::token::TokenService;

    use crate::application::config::PlacesConfig;
    use crate::application::CreatePlaceUseCase;
    use crate::domain::entity::place::Place;
    use crate::presentation::router::places_router_generic;

    use super::support::{InMemoryPlaceRepository, StubGeocoder, sample_input};

    async fn test_app(owner: UserId) -> (axum::Router, Arc<TokenService>, Place) {
        let repo = InMemoryPlaceRepository::default().with_user(&owner);
        let tokens = Arc::new(TokenService::with_random_secret());

        let create = CreatePlaceUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(StubGeocoder::empire_state()),
        );
        let place = create.execute(sample_input(owner)).await.unwrap();

        let app = places_router_generic(
            repo,
            StubGeocoder::empire_state(),
            tokens.clone(),
            PlacesConfig::default(),
        );

        (app, tokens, place)
    }

    #[tokio::test]
    async fn test_get_place_is_public() {
        let owner = UserId::new();
        let (app, _, place) = test_app(owner).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", place.place_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_user_places_returns_user_envelope() {
        let owner = UserId::new();
        let (app, _, place) = test_app(owner).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/user/{}", owner))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        // The owning user carries their populated places
        let user = json.get("user").expect("user envelope");
        assert_eq!(user["id"].as_str(), Some(owner.to_string().as_str()));
        assert_eq!(
            user["places"][0]["id"].as_str(),
            Some(place.place_id.to_string().as_str())
        );
        assert!(user.get("password").is_none());
    }

    #[tokio::test]
    async fn test_delete_without_token_is_unauthorized() {
        let owner = UserId::new();
        let (app, _, place) = test_app(owner).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", place.place_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_without_token_is_unauthorized() {
        let owner = UserId::new();
        let (app, _, _) = test_app(owner).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_delete_with_owner_token_succeeds() {
        let owner = UserId::new();
        let (app, tokens, place) = test_app(owner).await;

        let token = tokens.issue(owner.into_uuid(), "ann@x.com").unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", place.place_id))
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_patch_with_foreign_token_is_unauthorized() {
        let owner = UserId::new();
        let (app, tokens, place) = test_app(owner).await;

        let stranger = UserId::new();
        let token = tokens.issue(stranger.into_uuid(), "bob@x.com").unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/{}", place.place_id))
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"Hijacked","description":"Should never stick."}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_forged_token_is_rejected() {
        let owner = UserId::new();
        let (app, _, place) = test_app(owner).await;

        let other_service = TokenService::with_random_secret();
        let forged = other_service.issue(owner.into_uuid(), "ann@x.com").unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", place.place_id))
                    .header(header::AUTHORIZATION, format!("Bearer {forged}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
