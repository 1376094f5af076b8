use mongodb::bson::Bson;

use crate::config::ProbeConfig;
use crate::db_mongo::{self, queries};
use crate::error::ProbeError;

/// Terminal state of a single probe run.
#[derive(Debug)]
pub enum ProbeOutcome {
    ConfigMissing,
    WriteSucceeded { inserted_id: Bson },
    WriteFailed { error: ProbeError },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::WriteSucceeded { .. })
    }

    /// Human-readable status line for the console.
    pub fn report(&self) -> String {
        match self {
            ProbeOutcome::ConfigMissing => {
                format!("❌ {}", ProbeError::ConfigurationMissing)
            }
            ProbeOutcome::WriteSucceeded { inserted_id } => {
                format!("✅ Connected and wrote document with _id: {}", display_id(inserted_id))
            }
            ProbeOutcome::WriteFailed { error } => format!("❌ Mongo error: {}", error),
        }
    }
}

fn display_id(id: &Bson) -> String {
    match id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => id.to_string(),
    }
}

/// Run the connectivity probe: echo config, then attempt one write.
pub async fn run_probe(config: &ProbeConfig) -> ProbeOutcome {
    println!("{}", config);

    let Some(uri) = config.connection_uri() else {
        tracing::warn!("Skipping connection attempt, no connection string configured");
        return ProbeOutcome::ConfigMissing;
    };

    match write_ping(uri, &config.database_name).await {
        Ok(inserted_id) => {
            tracing::info!("✓ Ping write succeeded in {}", config.database_name);
            ProbeOutcome::WriteSucceeded { inserted_id }
        }
        Err(error) => {
            tracing::error!("Ping write failed: {}", error);
            ProbeOutcome::WriteFailed { error }
        }
    }
}

async fn write_ping(uri: &str, db_name: &str) -> Result<Bson, ProbeError> {
    let client = db_mongo::create_client(uri).await?;
    let db = db_mongo::get_database(&client, db_name);
    let inserted_id = queries::insert_ping(&db).await?;
    Ok(inserted_id)
}
