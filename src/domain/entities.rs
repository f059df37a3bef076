//! Domain entities: product shapes exchanged with the catalog API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product identifier as used in `products/<id>` paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ProductId)
    }
}

/// Reduced `{id, title, price}` view used for list/read/delete output.
///
/// Values are copied as the service sent them, whatever their JSON type.
/// A key missing from the source is left out of the output; an explicit
/// `null` is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl ProductSummary {
    /// Pick `id`, `title` and `price` out of one product. Non-objects project to `{}`.
    pub fn project(product: &Value) -> Self {
        Self {
            id: product.get("id").cloned(),
            title: product.get("title").cloned(),
            price: product.get("price").cloned(),
        }
    }
}

/// Arguments supplied on the command line for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductArgs {
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// Request body for `POST /products`. Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl NewProduct {
    /// Fill in the fields the command line does not supply.
    pub fn from_args(args: NewProductArgs, description: &str, image: &str) -> Self {
        Self {
            title: args.title,
            price: args.price,
            description: description.to_string(),
            image: image.to_string(),
            category: args.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_product_with_extra_fields_when_projecting_then_keeps_id_title_price() {
        let summary = ProductSummary::project(&json!({
            "id": 1,
            "title": "A",
            "price": 9.99,
            "rating": {"rate": 3.9, "count": 120},
            "category": "misc"
        }));

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"id": 1, "title": "A", "price": 9.99})
        );
    }

    #[test]
    fn given_integer_price_when_projecting_then_prints_without_fraction() {
        let summary = ProductSummary::project(&json!({"id": 7, "title": "Bag", "price": 695}));

        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"id":7,"title":"Bag","price":695}"#
        );
    }

    #[test]
    fn given_null_and_missing_fields_when_projecting_then_keeps_null_and_drops_missing() {
        let summary = ProductSummary::project(&json!({"id": "5", "price": null}));

        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"id":"5","price":null}"#
        );
    }

    #[test]
    fn given_non_object_when_projecting_then_empty_object() {
        let summary = ProductSummary::project(&json!(42));

        assert_eq!(summary, ProductSummary::default());
        assert_eq!(serde_json::to_string(&summary).unwrap(), "{}");
    }

    #[test]
    fn given_args_when_building_new_product_then_serializes_in_wire_order() {
        let body = NewProduct::from_args(
            NewProductArgs {
                title: "Shoe".into(),
                price: 19.99,
                category: "footwear".into(),
            },
            "desc",
            "https://img",
        );

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"Shoe","price":19.99,"description":"desc","image":"https://img","category":"footwear"}"#
        );
    }
}
