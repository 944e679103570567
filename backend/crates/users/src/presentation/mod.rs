//! Presentation Layer
//!
//! HTTP handlers, DTOs and routing.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{users_router, users_router_generic};
