use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 20;
const CONNECT_RETRIES: u32 = 5;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// Connects to Postgres, retrying with exponential backoff while the
/// database comes up.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 0;
    let mut backoff = Duration::from_secs(INITIAL_BACKOFF_SECS);

    loop {
        let result = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await;

        match result {
            Ok(pool) => {
                info!(max_connections = MAX_CONNECTIONS, "Database connection established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_RETRIES => {
                attempt += 1;
                warn!(
                    attempt,
                    max_attempts = CONNECT_RETRIES,
                    retry_in = ?backoff,
                    error = %e,
                    "Failed to connect to database"
                );

                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Applies the embedded migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

pub async fn check_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
