//! Database test utilities and shared infrastructure

use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

use crate::database;

const USER: &str = "catalog_test";
const PASSWORD: &str = "catalog_test_password";

/// Shared PostgreSQL container that starts once and is reused across all tests
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("catalog_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn base_url() -> String {
    let container = POSTGRES_CONTAINER
        .get_or_init(init_postgres_container)
        .await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}")
}

/// An isolated, freshly migrated database inside the shared container.
///
/// Each test gets its own database, so no cleanup is needed between tests;
/// the container itself goes away with the test process.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        let base_url = base_url().await;

        let name = format!(
            "catalog_test_{}_{}",
            std::process::id(),
            DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        let mut conn = PgConnection::connect(&format!("{base_url}/postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&format!("{base_url}/{name}"))
            .await
            .expect("Failed to create pool for database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
