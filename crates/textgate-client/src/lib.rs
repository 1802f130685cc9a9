//! # textgate-client
//!
//! HTTP client for the Weaviate vector database, covering the subset of the
//! upstream API that the textgate gateway delegates to: schema (collection)
//! CRUD, existence checks, object insert/list, and nearest-text-match
//! queries via GraphQL.
//!
//! Vectorization and similarity search happen entirely upstream; this crate
//! only speaks the wire protocol and classifies upstream failures into
//! [`ClientError`] variants the gateway can map to HTTP statuses.

#![warn(missing_docs)]

mod client;
pub mod config;
pub mod error;
pub mod schema;

pub use client::WeaviateClient;
pub use config::WeaviateConfig;
pub use error::{ClientError, Result};
pub use schema::{CollectionSchema, DataObject, MetaInfo, PropertySchema, SearchMatch};
