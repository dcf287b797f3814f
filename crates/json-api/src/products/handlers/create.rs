//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use catalog_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{models::ProductEnvelope, requests},
    state::State,
    validation::Input,
};

/// Create Product Handler
///
/// Expects a JSON body with `name` and a strictly positive `price`. Newly
/// created products are always available.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let input = Input::new().with_request_body(req).await;
    let product = requests::create_product().extract::<NewProduct>(&input)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state.app.products.create_product(product).await?;

    tracing::Span::current().record("product_id", tracing::field::display(product.id));

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %product.id, "created product");

    Ok(Json(product.into()))
}
