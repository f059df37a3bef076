//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ApiClient, CatalogService};
use crate::config::Settings;
use crate::infrastructure::traits::{HttpTransport, ReqwestTransport};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Product catalog operations
    pub catalog: CatalogService,
}

impl ServiceContainer {
    /// Create a new service container with the real HTTP transport.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let http = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_deps(settings, http))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, http: Arc<dyn HttpTransport>) -> Self {
        let api = ApiClient::new(http, settings.base_url.clone(), settings.header_list());
        let catalog = CatalogService::new(api, settings.placeholder);

        Self { catalog }
    }
}
