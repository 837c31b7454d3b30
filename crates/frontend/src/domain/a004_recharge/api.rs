use contracts::domain::a004_recharge::RechargeRecord;
use contracts::shared::envelope::{ApiEnvelope, ListQuery, Paged};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

const BASE: &str = "/api/admin/recharges";

/// The recharge ledger is read-only from the console: list and detail only.
pub async fn list(query: &ListQuery) -> Result<Paged<RechargeRecord>, ApiError> {
    let env: ApiEnvelope<Paged<RechargeRecord>> = gateway::get_json(BASE, Some(query)).await?;
    expect_data(env)
}

pub async fn detail(id: &str) -> Result<Option<RechargeRecord>, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<RechargeRecord> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}
