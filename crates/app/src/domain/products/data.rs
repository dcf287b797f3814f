//! Products Data

/// New Product Data
///
/// Availability is not part of the input; new products start available.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Full Product Replacement Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}
