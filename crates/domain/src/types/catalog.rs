//! Catalog resources: programs, items, and rewards

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loyalty program operated on the platform
///
/// Programs scope every other resource: items, rewards, and members all
/// belong to exactly one program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A purchasable catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in the program's point currency
    pub points_price: i64,
    pub quantity_available: Option<i64>,
    /// Free-form merchant attributes (size, color, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a catalog item
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub program_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<i64>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Partial update for a catalog item; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<i64>,
}

/// A redeemable reward within a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub description: Option<String>,
    pub points_required: i64,
    pub quantity_available: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}
