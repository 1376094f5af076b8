use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

/// Diagnostic record written once per probe run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub ok: bool,
}

impl PingDocument {
    pub fn new() -> Self {
        Self { id: None, ok: true }
    }
}

impl Default for PingDocument {
    fn default() -> Self {
        Self::new()
    }
}
