//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, tunable work factor)
//! - Cookie management

pub mod cookie;
pub mod password;
