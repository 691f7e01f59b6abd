//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortcode mapping together with its click ledger
//! - [`ClickEvent`] - A single successful resolution of a shortcode
//! - [`UrlStats`] - Read-only projection of a record with computed expiry
//!
//! Creation input is carried separately in [`NewUrlRecord`].

pub mod click;
pub mod url_record;

pub use click::ClickEvent;
pub use url_record::{NewUrlRecord, UrlRecord, UrlStats};
