//! Product catalog service
//!
//! One method per supported command. Each issues exactly one request.
//! `Ok(None)` means the service answered without usable content.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::services::ApiClient;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::PlaceholderConfig;
use crate::domain::{Method, NewProduct, NewProductArgs, ProductId, ProductSummary, ResourcePath};

pub struct CatalogService {
    api: ApiClient,
    placeholder: PlaceholderConfig,
}

impl CatalogService {
    pub fn new(api: ApiClient, placeholder: PlaceholderConfig) -> Self {
        Self { api, placeholder }
    }

    /// `GET /products`, projected to `{id, title, price}` in source order.
    ///
    /// A body that is not a JSON array is a decode error.
    #[instrument(skip(self))]
    pub fn list_products(&self) -> ApplicationResult<Option<Vec<ProductSummary>>> {
        let url = self.api.url_for(&ResourcePath::Collection);
        let reply = self.api.fetch(&url, Method::Get, &[])?;
        match reply.into_value() {
            Some(value) => {
                let items: Vec<Value> = decode(value, &url)?;
                let products: Vec<ProductSummary> =
                    items.iter().map(ProductSummary::project).collect();
                debug!("list_products: {} products", products.len());
                Ok(Some(products))
            }
            None => Ok(None),
        }
    }

    /// `GET /products/<id>`, projected.
    #[instrument(skip(self))]
    pub fn get_product(&self, id: ProductId) -> ApplicationResult<Option<ProductSummary>> {
        let url = self.api.url_for(&ResourcePath::Item(id));
        let reply = self.api.fetch(&url, Method::Get, &[])?;
        Ok(reply.into_value().as_ref().map(ProductSummary::project))
    }

    /// `POST /products`; returns the created product exactly as the service sent it.
    #[instrument(skip(self))]
    pub fn create_product(&self, args: NewProductArgs) -> ApplicationResult<Option<Value>> {
        let url = self.api.url_for(&ResourcePath::Collection);
        let body = self.new_product(args);
        let reply = self.api.fetch_with_body(&url, Method::Post, &body, &[])?;
        Ok(reply.into_value())
    }

    /// `DELETE /products/<id>`; returns the projection of the deleted product.
    #[instrument(skip(self))]
    pub fn delete_product(&self, id: ProductId) -> ApplicationResult<Option<ProductSummary>> {
        let url = self.api.url_for(&ResourcePath::Item(id));
        let reply = self.api.fetch(&url, Method::Delete, &[])?;
        Ok(reply.into_value().as_ref().map(ProductSummary::project))
    }

    /// Request body for `args`, with the configured placeholder fields.
    pub fn new_product(&self, args: NewProductArgs) -> NewProduct {
        NewProduct::from_args(args, &self.placeholder.description, &self.placeholder.image)
    }
}

fn decode<T: DeserializeOwned>(value: Value, url: &str) -> ApplicationResult<T> {
    serde_json::from_value(value).map_err(|source| ApplicationError::Decode {
        context: url.to_string(),
        source,
    })
}
