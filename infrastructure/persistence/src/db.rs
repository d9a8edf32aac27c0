use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String, max_connections: u32) -> Self {
        Self {
            connection_string,
            max_connections: max_connections.max(1),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to catalog database"
    );
    Ok(pool)
}

/// Applies pending migrations found in `migrations_path`.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.exists() {
        tracing::error!(path = migrations_path, "Migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Could not load migrations");
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Migration failed");
            DatabaseError::MigrationError
        })
}

/// Logs a failed query and hides the driver error behind the domain one.
pub(crate) fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(operation, error = %err, "Database query failed");
        RepositoryError::DatabaseError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_driver_errors_to_database_error() {
        let mapped = database_error("category.find_all")(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, RepositoryError::DatabaseError));
    }

    #[test]
    fn should_keep_at_least_one_connection() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string(), 0);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn should_default_acquire_timeout() {
        let config = DatabaseConfig::new("postgres://localhost/catalog".to_string(), 5);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }
}
