//! HTTP handlers for the textgate REST API.
//!
//! This module organizes handlers by domain:
//! - `health`: Health check endpoint
//! - `collections`: Collection CRUD operations
//! - `search`: Nearest-text-match search
//! - `data`: Record insert and listing

pub mod collections;
pub mod data;
pub mod health;
pub mod search;

pub use collections::{create_collection, delete_collection, get_collection, list_collections};
pub use data::{insert_data, list_data};
pub use health::health_check;
pub use search::search_collection;
