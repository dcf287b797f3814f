//! App Router

use salvo::Router;

use crate::{products, welcome};

/// Routes under `/api`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api").get(welcome::handler).push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{id}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .patch(products::toggle::handler)
                    .delete(products::delete::handler),
            ),
    )
}
