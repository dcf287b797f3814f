//! API root greeting.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WelcomeResponse {
    pub msg: String,
}

/// API root
///
/// Confirms the API is reachable.
#[endpoint(tags("api"), summary = "API root")]
pub(crate) async fn handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        msg: "Desde Api".to_string(),
    })
}
