use serde::{Deserialize, Serialize};

use crate::domain::common::ReviewStatus;

/// Immutable recharge ledger entry. One member has many of these; the ledger
/// is append-only and the console never mutates an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeRecord {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub member_id: String,
    /// Paid top-up.
    pub amount: f64,
    /// Bonus top-up granted alongside the payment.
    #[serde(default)]
    pub gift_amount: f64,
    /// Balance snapshots after this entry was applied.
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub gift_balance: f64,
    /// Staff member who processed the top-up.
    #[serde(default)]
    pub staff_id: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}
