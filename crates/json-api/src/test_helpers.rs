//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService, ProductsService,
        memory::InMemoryProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::state::State;

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: "Monitor Curvo".to_string(),
        price: 300.0,
        availability: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A mock that fails the test on any call at all.
pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_toggle_availability().never();
    products.expect_delete_product().never();
    products.expect_check_health().never();

    products
}

pub(crate) fn state_with_products(products: impl ProductsService + 'static) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: impl ProductsService + 'static, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

/// The full application router over an empty in-memory catalog.
pub(crate) fn in_memory_service() -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(InMemoryProductsService::new())))
            .push(crate::router::app_router()),
    )
}
