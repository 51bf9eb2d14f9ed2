pub mod entities;
pub mod repositories;
pub mod repository;
pub mod schema;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::server::config::ServerConfig;

/// Opens the connection pool and makes sure the collections exist.
pub async fn connect(config: &ServerConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.to_owned());
    opt.max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    schema::ensure_schema(&db).await?;
    info!(max_connections = config.max_connections, "Connected to gallery database.");
    Ok(db)
}
