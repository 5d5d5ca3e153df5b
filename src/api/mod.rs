//! API Module
//!
//! HTTP handlers and routing for the metadata service.
//!
//! # Endpoints
//! - `GET /info/*path` - Metadata of the entry at a path
//! - `PUT /objects/*path` - Store an object
//! - `DELETE /objects/*path` - Delete an object
//! - `POST /touch/*path` - Create or refresh an object
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
