//! Typed client for the product catalog JSON API.
//!
//! Form input is checked and converted before any request is sent, and every
//! response body is decoded into the expected shape before it is returned.

mod client;
mod errors;
mod forms;
mod models;

pub use client::ProductsClient;
pub use errors::ClientError;
pub use forms::ProductForm;
pub use models::{DraftProduct, Product};
