//! Lazy connection pool, initialized on first use.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Resolve the connection string from `DATABASE_URL` (after loading `.env`).
///
/// A missing variable is a configuration error, not a panic, so the caller
/// can surface it through the normal error path.
fn database_url() -> Result<String, sqlx::Error> {
    dotenvy::dotenv().ok();

    std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))
}

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url()?)
            .await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_url_is_a_configuration_error() {
        std::env::remove_var("DATABASE_URL");
        let err = database_url().unwrap_err();
        assert!(matches!(err, sqlx::Error::Configuration(_)));
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
