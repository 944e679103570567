//! Presentation Layer
//!
//! HTTP handlers, DTOs, routing and the bearer-token guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use middleware::AuthContext;
pub use router::{places_router, places_router_generic};
