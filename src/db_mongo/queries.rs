use anyhow::{Result, Context};
use mongodb::{Database, bson::Bson};
use super::models::*;

pub const PING_COLLECTION: &str = "test_ping";

/// Insert a fresh `{ ok: true }` document and return the generated `_id`.
pub async fn insert_ping(db: &Database) -> Result<Bson> {
    let collection = db.collection::<PingDocument>(PING_COLLECTION);

    let result = collection
        .insert_one(PingDocument::new())
        .await
        .with_context(|| format!("Failed to insert into {}.{}", db.name(), PING_COLLECTION))?;

    tracing::debug!(
        "Inserted ping document into {}.{}: {}",
        db.name(),
        PING_COLLECTION,
        result.inserted_id
    );

    Ok(result.inserted_id)
}
