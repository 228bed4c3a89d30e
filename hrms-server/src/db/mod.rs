//! Database Module
//!
//! Owns the document-database client and hands out repositories.

pub mod models;
pub mod repository;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::core::{Config, ServerError};
use repository::MongoEmployeeRepository;

/// Database service: one client for the whole process
///
/// `Database` keeps the pooled client alive; clones are cheap handles onto
/// the same pool.
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Database,
}

impl DbService {
    /// Connect and verify the server answers a ping
    ///
    /// Connection and ping are both bounded by the configured operation
    /// timeout. Any failure is [`ServerError::StorageUnavailable`].
    pub async fn connect(config: &Config) -> Result<Self, ServerError> {
        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .map_err(|e| ServerError::StorageUnavailable(format!("invalid connection string: {e}")))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(config.operation_timeout);
        options.server_selection_timeout = Some(config.operation_timeout);

        let client = Client::with_options(options)
            .map_err(|e| ServerError::StorageUnavailable(format!("error connecting to mongodb: {e}")))?;
        let db = client.database(&config.database_name);

        tokio::time::timeout(config.operation_timeout, db.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| {
                ServerError::StorageUnavailable(format!(
                    "error pinging mongodb: no answer within {:?}",
                    config.operation_timeout
                ))
            })?
            .map_err(|e| ServerError::StorageUnavailable(format!("error pinging mongodb: {e}")))?;

        tracing::info!(
            uri = %config.redacted_uri(),
            database = %config.database_name,
            "Database connection established"
        );

        Ok(Self { db })
    }

    pub fn employee_repository(&self) -> MongoEmployeeRepository {
        MongoEmployeeRepository::new(&self.db)
    }
}
