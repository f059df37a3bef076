//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (HttpTransport)
//! but are themselves concrete structs, not traits.

mod api_client;
mod catalog;

pub use api_client::{ApiClient, Reply, APPLICATION_JSON, CONTENT_TYPE};
pub use catalog::CatalogService;
