//! Strict Semantic Versioning 2.0.0 parsing and precedence
//!
//! ```
//! use semver_order::{Version, compare};
//! use std::cmp::Ordering;
//!
//! let rc = Version::parse("1.0.0-rc.1").unwrap();
//! let release = Version::parse("1.0.0+build.5").unwrap();
//!
//! assert!(rc < release);
//! assert_eq!(compare(&release, &Version::parse("1.0.0").unwrap()), Ordering::Equal);
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;

pub use version::{Identifier, InvalidReason, InvalidVersion, Version, compare, parse};
