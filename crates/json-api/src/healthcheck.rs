//! Liveness and product store readiness check.

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{errors::ApiError, extensions::*, state::State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HealthStatus {
    /// The product store answered
    Ok,

    /// The product store could not be reached
    Unavailable,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    pub status: HealthStatus,
}

/// Healthcheck
///
/// Answers 503 while the product store is unreachable.
#[endpoint(
    tags("health"),
    summary = "Health check",
    responses(
        (status_code = StatusCode::OK, description = "Service and product store are up"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Product store is unreachable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = match state.app.products.check_health().await {
        Ok(()) => HealthStatus::Ok,
        Err(error) => {
            warn!("product store health check failed: {error}");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            HealthStatus::Unavailable
        }
    };

    Ok(Json(HealthResponse { status }))
}
