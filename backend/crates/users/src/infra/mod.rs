//! Infrastructure Layer
//!
//! PostgreSQL repository implementations.

pub mod postgres;

pub use postgres::PgUserRepository;
