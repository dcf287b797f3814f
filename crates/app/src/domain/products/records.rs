//! Product Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
