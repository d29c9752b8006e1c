//! Membership resources: members, subsegments, and personalization

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A program member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub program_id: String,
    /// Merchant-side identifier, unique within a program
    pub external_id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub points_balance: i64,
    pub tier: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for enrolling a member
#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    pub program_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial update for a member; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// A rule-based slice of a program's membership
///
/// Criteria are kept opaque: the platform evaluates them server-side and the
/// SDK only passes them through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsegment {
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub criteria: serde_json::Value,
    pub member_count: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a subsegment
#[derive(Debug, Clone, Serialize)]
pub struct NewSubsegment {
    pub program_id: String,
    pub name: String,
    pub criteria: serde_json::Value,
}

/// Partial update for a subsegment
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubsegmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<serde_json::Value>,
}

/// Per-member personalization data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizationProfile {
    pub member_id: String,
    /// Item ids ranked by predicted affinity
    pub recommended_items: Vec<String>,
    /// Category affinity scores in `[0, 1]`
    #[serde(default)]
    pub affinities: HashMap<String, f64>,
    pub generated_at: DateTime<Utc>,
}
