//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed bearer tokens (HMAC-SHA256, fixed expiry)
//! - Uploaded-file resource handling

pub mod password;
pub mod token;
pub mod upload;
