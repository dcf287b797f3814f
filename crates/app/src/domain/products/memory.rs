//! In-memory products service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::domain::products::{
    ProductsService,
    data::{NewProduct, ProductUpdate},
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    products: BTreeMap<ProductId, ProductRecord>,
}

/// [`ProductsService`] backed by a process-local map.
///
/// Ids are assigned sequentially from 1 and never reused, matching the
/// `BIGSERIAL` column of the PostgreSQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    store: Mutex<Store>,
}

impl InMemoryProductsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.store.lock().await.products.values().cloned().collect())
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.store
            .lock()
            .await
            .products
            .get(&product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut store = self.store.lock().await;

        store.last_id += 1;

        let now = Timestamp::now();
        let record = ProductRecord {
            id: ProductId::from_i64(store.last_id),
            name: product.name,
            price: product.price,
            availability: true,
            created_at: now,
            updated_at: now,
        };

        store.products.insert(record.id, record.clone());

        Ok(record)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut store = self.store.lock().await;

        let record = store
            .products
            .get_mut(&product)
            .ok_or(ProductsServiceError::NotFound)?;

        record.name = update.name;
        record.price = update.price;
        record.availability = update.availability;
        record.updated_at = Timestamp::now();

        Ok(record.clone())
    }

    async fn toggle_availability(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut store = self.store.lock().await;

        let record = store
            .products
            .get_mut(&product)
            .ok_or(ProductsServiceError::NotFound)?;

        record.availability = !record.availability;
        record.updated_at = Timestamp::now();

        Ok(record.clone())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        self.store
            .lock()
            .await
            .products
            .remove(&product)
            .map(|_removed| ())
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn check_health(&self) -> Result<(), ProductsServiceError> {
        Ok(())
    }
}
