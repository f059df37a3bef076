//! Typed command invocations parsed from positional arguments
//!
//! Every supported shape is matched exactly once in [`Command::parse`]:
//!
//! | method   | resource        | trailing args                 |
//! |----------|-----------------|-------------------------------|
//! | `GET`    | `products`      | none                          |
//! | `GET`    | `products/<id>` | none                          |
//! | `POST`   | `products`      | title, price, category (+any) |
//! | `DELETE` | `products/<id>` | none                          |

use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, NewProductArgs, ProductId};

/// Name of the only resource collection the catalog exposes.
pub const PRODUCTS: &str = "products";

pub const POST_USAGE: &str = "POST products <title> <price> <category>";

/// HTTP method named by the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "DELETE" => Ok(Method::Delete),
            _ => Err(DomainError::UnknownCommand(s.to_string())),
        }
    }
}

/// Resource path named by the second positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath {
    /// `products`
    Collection,
    /// `products/<id>`
    Item(ProductId),
}

impl ResourcePath {
    pub fn parse(resource: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = resource.split('/').collect();
        match parts.as_slice() {
            [PRODUCTS] => Ok(ResourcePath::Collection),
            [PRODUCTS, id] => id
                .parse::<ProductId>()
                .map(ResourcePath::Item)
                .map_err(|_| DomainError::InvalidProductId(id.to_string())),
            _ => Err(DomainError::UnknownResource(resource.to_string())),
        }
    }

    /// Path relative to the API base URL, e.g. `/products/3`.
    pub fn to_api_path(&self) -> String {
        match self {
            ResourcePath::Collection => format!("/{PRODUCTS}"),
            ResourcePath::Item(id) => format!("/{PRODUCTS}/{id}"),
        }
    }
}

/// One fully-validated invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListProducts,
    GetProduct { id: ProductId },
    CreateProduct(NewProductArgs),
    DeleteProduct { id: ProductId },
}

impl Command {
    /// Parse `<command> <resource> [args...]` into a command.
    ///
    /// Rejects unknown or malformed shapes so that nothing reaches the
    /// network unless it matches one of the four supported forms.
    pub fn parse(command: &str, resource: Option<&str>, args: &[String]) -> Result<Self, DomainError> {
        let method: Method = command.parse()?;
        let resource = resource.ok_or(DomainError::MissingResource)?;
        let path = ResourcePath::parse(resource)?;

        match (method, path) {
            (Method::Get, ResourcePath::Collection) => {
                reject_trailing(method, args)?;
                Ok(Command::ListProducts)
            }
            (Method::Get, ResourcePath::Item(id)) => {
                reject_trailing(method, args)?;
                Ok(Command::GetProduct { id })
            }
            (Method::Post, ResourcePath::Collection) => parse_create(args),
            (Method::Delete, ResourcePath::Item(id)) => {
                reject_trailing(method, args)?;
                Ok(Command::DeleteProduct { id })
            }
            (method, _) => Err(DomainError::UnsupportedResource {
                command: method.to_string(),
                resource: resource.to_string(),
            }),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Command::ListProducts | Command::GetProduct { .. } => Method::Get,
            Command::CreateProduct(_) => Method::Post,
            Command::DeleteProduct { .. } => Method::Delete,
        }
    }

    pub fn resource(&self) -> ResourcePath {
        match self {
            Command::ListProducts | Command::CreateProduct(_) => ResourcePath::Collection,
            Command::GetProduct { id } | Command::DeleteProduct { id } => ResourcePath::Item(*id),
        }
    }
}

fn reject_trailing(method: Method, args: &[String]) -> Result<(), DomainError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(DomainError::UnexpectedArguments {
            command: method.to_string(),
            args: args.join(" "),
        })
    }
}

fn parse_create(args: &[String]) -> Result<Command, DomainError> {
    let [title, price, category, ..] = args else {
        return Err(DomainError::MissingArguments { usage: POST_USAGE });
    };
    let price = parse_price(price)?;

    Ok(Command::CreateProduct(NewProductArgs {
        title: title.clone(),
        price,
        category: category.clone(),
    }))
}

fn parse_price(raw: &str) -> Result<f64, DomainError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(DomainError::InvalidPrice(raw.to_string())),
    }
}
