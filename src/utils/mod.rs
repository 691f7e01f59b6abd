//! Utility functions for code generation, URL checks and request handling.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`url_validator`] - Redirect target pre-check
//! - [`base_url`] - Base URL resolution from configuration or request headers

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
