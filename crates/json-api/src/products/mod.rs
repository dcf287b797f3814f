//! Products

mod errors;
mod handlers;
mod models;
mod requests;

pub(crate) use handlers::*;
