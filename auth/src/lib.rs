//! Authentication primitives for the marketplace services.
//!
//! Provides the stateless building blocks of credential checks and sessions:
//! - Password hashing and constant-time verification (Argon2id)
//! - Session token signing and signature-checked decoding (HS256 JWT)
//!
//! Nothing in this crate performs I/O. Services own account lookup and
//! decide what the claims mean.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("correct-horse").unwrap();
//! assert!(hasher.verify("correct-horse", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtHandler, SessionClaims};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let now = Utc::now();
//! let claims = SessionClaims::new("user123", "alice@example.com", "BUYER", now, Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//!
//! let decoded: SessionClaims = handler.decode(&token).unwrap();
//! assert!(!decoded.is_expired(now.timestamp()));
//! ```

pub mod jwt;
pub mod password;

pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
