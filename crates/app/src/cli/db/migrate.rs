use catalog_app::database;

use super::DatabaseArgs;

pub(crate) async fn run(args: DatabaseArgs) -> Result<(), String> {
    let pool = args.connect().await?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}
