//! `storefront-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod guard;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use guard::ExpectedStatus;

// Used by `uuid_newtype!` expansions so callers need not depend on these directly.
#[doc(hidden)]
pub use serde;
pub use uuid;
