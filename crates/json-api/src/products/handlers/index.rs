//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::models::ProductsEnvelope, state::State};

/// List Products Handler
///
/// Returns every product ordered by id.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Product list"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await?;

    Ok(Json(ProductsEnvelope {
        data: products.into_iter().map(Into::into).collect(),
    }))
}
