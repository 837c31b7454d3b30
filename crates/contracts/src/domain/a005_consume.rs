use serde::{Deserialize, Serialize};

use crate::domain::common::ReviewStatus;

/// Immutable consume ledger entry. Mirrors the recharge record but deducts,
/// and carries the room plus the two staff roles involved in one
/// transaction (who applied it and who received the guest).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeRecord {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub member_id: String,
    /// Deducted amount; negative values deduct from the paid balance.
    pub amount: f64,
    #[serde(default)]
    pub gift_amount: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub gift_balance: f64,
    #[serde(default)]
    pub room_no: Option<String>,
    #[serde(default)]
    pub consume_type: Option<String>,
    #[serde(default)]
    pub apply_staff_id: Option<String>,
    #[serde(default)]
    pub reception_staff_id: Option<String>,
    /// Receipt image reference, if a voucher was uploaded.
    #[serde(default)]
    pub payment_voucher: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}
