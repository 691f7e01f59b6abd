//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Registry contract implemented by the infrastructure layer
//! - [`clock`] - Time source used for expiry and click timestamps
//! - [`error`] - Typed registry failures
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Expiry is a predicate evaluated on access, never an active deletion

pub mod clock;
pub mod entities;
pub mod error;
pub mod repositories;

pub use clock::{Clock, SystemClock};
pub use error::RegistryError;
