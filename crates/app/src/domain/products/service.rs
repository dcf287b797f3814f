//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }

    /// Removes every product and restarts id assignment from 1.
    ///
    /// # Errors
    ///
    /// Returns an error when the statement or transaction fails.
    #[tracing::instrument(name = "products.service.clear_products", skip(self), err)]
    pub async fn clear_products(&self) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.clear_products(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tracing::Span::current().record("product_id", tracing::field::display(created.id));

        tx.commit().await?;

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, product, update),
        fields(product_id = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.toggle_availability",
        skip(self, product),
        fields(product_id = %product),
        err
    )]
    async fn toggle_availability(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let toggled = self.repository.toggle_availability(&mut tx, product).await?;

        tx.commit().await?;

        Ok(toggled)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self, product),
        fields(product_id = %product),
        err
    )]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn check_health(&self) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.ping(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new, available product and returns it with its assigned id.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites name, price and availability of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Flips the availability flag of an existing product.
    async fn toggle_availability(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Permanently removes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;

    /// Succeeds when the backing store can serve requests.
    async fn check_health(&self) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn mouse() -> NewProduct {
        NewProduct {
            name: "Mouse".to_string(),
            price: 200.0,
        }
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn create_product_assigns_id_and_defaults_availability() -> TestResult {
        let ctx = TestContext::new().await;

        let product = ctx.products.create_product(mouse()).await?;

        assert!(product.id.into_i64() > 0, "id should be positive");
        assert_eq!(product.name, "Mouse");
        assert!((product.price - 200.0).abs() < f64::EPSILON);
        assert!(product.availability, "new products start available");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn create_product_assigns_fresh_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.products.create_product(mouse()).await?;
        let second = ctx.products.create_product(mouse()).await?;

        assert!(second.id > first.id, "ids should never be reused");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(mouse()).await?;
        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, created);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::from_i64(2000)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn list_products_returns_products_in_id_order() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.products.create_product(mouse()).await?;
        let second = ctx
            .products
            .create_product(NewProduct {
                name: "Monitor".to_string(),
                price: 250.99,
            })
            .await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![first.id, second.id]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn update_product_replaces_all_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(mouse()).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: "Mousepad".to_string(),
                    price: 40.0,
                    availability: false,
                },
            )
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Mousepad");
        assert!((updated.price - 40.0).abs() < f64::EPSILON);
        assert!(!updated.availability, "availability should be replaced");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn update_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                ProductId::from_i64(2000),
                ProductUpdate {
                    name: "Monitor".to_string(),
                    price: 499.0,
                    availability: true,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn negative_price_violates_check_constraint() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(mouse()).await?;

        let result = ctx
            .products
            .update_product(
                created.id,
                ProductUpdate {
                    name: "Mouse".to_string(),
                    price: -1.0,
                    availability: true,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn toggling_twice_restores_availability() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(mouse()).await?;

        let once = ctx.products.toggle_availability(created.id).await?;
        let twice = ctx.products.toggle_availability(created.id).await?;

        assert!(!once.availability, "first toggle should mark unavailable");
        assert!(twice.availability, "second toggle should restore availability");
        assert_eq!(twice.name, created.name);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn toggle_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .toggle_availability(ProductId::from_i64(2000))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(mouse()).await?;

        ctx.products.delete_product(created.id).await?;

        let result = ctx.products.get_product(created.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn delete_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product(ProductId::from_i64(2000)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn clear_products_restarts_ids() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(mouse()).await?;
        ctx.products.create_product(mouse()).await?;

        ctx.products.clear_products().await?;

        assert!(ctx.products.list_products().await?.is_empty());

        let product = ctx.products.create_product(mouse()).await?;

        assert_eq!(product.id, ProductId::from_i64(1));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the PostgreSQL testcontainer"]
    async fn check_health_succeeds_against_live_database() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.check_health().await?;

        Ok(())
    }
}
