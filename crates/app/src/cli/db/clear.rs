use catalog_app::{database::Db, domain::products::PgProductsService};

use super::DatabaseArgs;

pub(crate) async fn run(args: DatabaseArgs) -> Result<(), String> {
    let pool = args.connect().await?;

    PgProductsService::new(Db::new(pool))
        .clear_products()
        .await
        .map_err(|error| format!("failed to clear products: {error}"))?;

    println!("products cleared");

    Ok(())
}
