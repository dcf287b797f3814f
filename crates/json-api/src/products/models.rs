//! Product response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::ProductRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product id
    pub id: i64,

    /// The product name
    pub name: String,

    /// The product price
    pub price: f64,

    /// Whether the product is available
    pub availability: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            availability: product.availability,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Single product envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    pub data: ProductResponse,
}

impl From<ProductRecord> for ProductEnvelope {
    fn from(product: ProductRecord) -> Self {
        Self {
            data: product.into(),
        }
    }
}

/// Product list envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsEnvelope {
    pub data: Vec<ProductResponse>,
}

/// Confirmation message envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageEnvelope {
    pub data: String,
}
