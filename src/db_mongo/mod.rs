pub mod models;
pub mod queries;

use anyhow::{Result, Context};
use mongodb::{Client, Database};

/// Create MongoDB client.
///
/// The driver connects lazily, so no round trip happens here; the first
/// operation against the returned client is what reaches the server.
pub async fn create_client(uri: &str) -> Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .context("Failed to create MongoDB client")?;

    tracing::info!("MongoDB client created");
    Ok(client)
}

/// Get database handle
pub fn get_database(client: &Client, db_name: &str) -> Database {
    client.database(db_name)
}
