//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{models::ProductEnvelope, requests},
    state::State,
    validation::Input,
};

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let input = Input::new().with_param("id", id.into_inner());
    let id = requests::product_id().extract::<ProductId>(&input)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state.app.products.get_product(id).await?;

    Ok(Json(product.into()))
}
