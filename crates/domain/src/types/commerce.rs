//! Commerce resources: orders and coupons

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle states as reported by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Fulfilled,
    Cancelled,
    Refunded,
}

/// A single line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub quantity: u32,
    /// Point cost per unit at order time
    pub points_each: i64,
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub program_id: String,
    pub member_id: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for placing an order
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub program_id: String,
    pub member_id: String,
    pub lines: Vec<OrderLine>,
    /// Optional coupon code applied at checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

/// A discount or value coupon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub program_id: String,
    pub code: String,
    /// Point value credited when the coupon is applied
    pub points_value: i64,
    pub redeemed: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload for issuing a coupon
#[derive(Debug, Clone, Serialize)]
pub struct NewCoupon {
    pub program_id: String,
    pub code: String,
    pub points_value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
