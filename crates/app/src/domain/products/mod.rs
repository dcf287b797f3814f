//! Products

pub mod data;
pub mod errors;
#[cfg(feature = "test-support")]
pub mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
