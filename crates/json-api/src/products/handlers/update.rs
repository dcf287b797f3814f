//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        models::ProductEnvelope,
        requests::{self, ReplaceProduct},
    },
    state::State,
    validation::Input,
};

/// Update Product Handler
///
/// Replaces name, price and availability of an existing product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let input = Input::new()
        .with_param("id", id.into_inner())
        .with_request_body(req)
        .await;
    let ReplaceProduct { id, update } = requests::update_product().extract(&input)?;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state.app.products.update_product(id, update).await?;

    tracing::info!(product_id = %id, "updated product");

    Ok(Json(product.into()))
}
