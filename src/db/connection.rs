//! Database connection management using sqlx

use crate::config::Config;
use crate::error::{ContentError, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

pub type DbPool = PgPool;

/// Initialize the database connection pool
pub async fn init_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| ContentError::Config("DATABASE_URL is not set".to_string()))?;
    
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await?;
    
    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await?;
    
    info!("Connected to {}", database_url.split('@').nth(1).unwrap_or("database"));
    
    Ok(pool)
}
