//! Password hashing and verification.
//!
//! Passwords are stored as Argon2id PHC strings; the salt is generated per
//! hash, so two hashes of the same password never compare equal.

mod password;

pub use password::{hash_password, verify_password};
