//! Toggle Product Availability Handler

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

/// Toggle Product Availability Handler
///
/// Flips the availability flag. Any request body is ignored.
#[endpoint(
    tags("products"),
    summary = "Toggle Product Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability toggled"),
    ),
)]
#[tracing::instrument(name = "products.toggle_availability", skip(id, depot), err)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let input = Input::new().with_param("id", id.into_inner());
    let id = requests::product_id().extract::<ProductId>(&input)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state.app.products.toggle_availability(id).await?;

    tracing::info!(
        product_id = %id,
        availability = product.availability,
        "toggled product availability"
    );

    Ok(Json(product.into()))
}
