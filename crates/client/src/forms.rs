//! Product form conversion.

use crate::{
    errors::ClientError,
    models::{DraftProduct, Product},
};

/// Raw product form fields, all as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub availability: String,
}

impl ProductForm {
    /// Convert into a new product for creation. Availability is not sent.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidDraft`] when the price is not a number.
    pub fn to_draft(&self) -> Result<DraftProduct, ClientError> {
        Ok(DraftProduct {
            name: self.name.clone(),
            price: parse_price(&self.price)?,
        })
    }

    /// Convert into a full replacement of product `id`.
    ///
    /// Availability is `true` only for the text `true`, in any case.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidDraft`] when the price is not a number.
    pub fn to_product(&self, id: i64) -> Result<Product, ClientError> {
        Ok(Product {
            id,
            name: self.name.clone(),
            price: parse_price(&self.price)?,
            availability: self.availability.trim().eq_ignore_ascii_case("true"),
        })
    }
}

/// Blank input reads as zero, leaving the range check to the server.
fn parse_price(price: &str) -> Result<f64, ClientError> {
    let price = price.trim();

    if price.is_empty() {
        return Ok(0.0);
    }

    price
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(ClientError::InvalidDraft("price is not a number"))
}
