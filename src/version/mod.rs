//! Semantic Versioning 2.0.0 parsing and precedence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Grammar   │────▶│    Parse    │────▶│   Version   │
//! │ (lexical)   │     │  (split)    │     │ (immutable) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │ Collection  │◀────│   Compare   │
//!                     │ (sort, max) │     │ (precedence)│
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grammar`]: Lexical rules for core fields and identifiers
//! - [`parse`]: Decomposes a string into a [`Version`]
//! - [`compare`]: Precedence ordering and the trait impls built on it
//! - [`collection`]: Sorting, deduplication and latest-version helpers
//! - [`identifier`]: Numeric and alphanumeric prerelease identifiers
//! - [`error`]: The [`InvalidVersion`] error and its reasons
//! - [`types`]: The [`Version`] value type

pub mod collection;
pub mod compare;
pub mod error;
pub mod grammar;
pub mod identifier;
pub mod parse;
pub mod types;

pub use compare::compare;
pub use error::{Component, InvalidReason, InvalidVersion, Section};
pub use identifier::Identifier;
pub use parse::parse;
pub use types::Version;
