//! # encore-core
//!
//! Core types and error handling for Encore, an A-B loop player driving the
//! `YouTube` embed.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
