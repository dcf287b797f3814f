//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::domain::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{models::MessageEnvelope, requests},
    state::State,
    validation::Input,
};

const DELETED_MESSAGE: &str = "El Producto ha sido eliminado correctamente";

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
    ),
)]
#[tracing::instrument(name = "products.delete", skip(id, depot), err)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let input = Input::new().with_param("id", id.into_inner());
    let id = requests::product_id().extract::<ProductId>(&input)?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.products.delete_product(id).await?;

    tracing::info!(product_id = %id, "deleted product");

    Ok(Json(MessageEnvelope {
        data: DELETED_MESSAGE.to_string(),
    }))
}
