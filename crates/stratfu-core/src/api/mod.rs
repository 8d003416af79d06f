//! Document source client.
//!
//! This module provides the `DocumentClient` for obtaining the dungeon
//! document, either over HTTP from the published site or from a bundled
//! file on disk, depending on the build target.

pub mod client;
pub mod error;

pub use client::{DocumentClient, DocumentSource};
pub use error::DocumentError;
