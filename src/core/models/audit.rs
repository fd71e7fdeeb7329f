use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: String,
    #[schema(value_type = Object)]
    pub details: HashMap<String, serde_json::Value>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: DateTime<Utc>,
}
